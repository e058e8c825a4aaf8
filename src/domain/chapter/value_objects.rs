//! Chapter Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 草稿批次唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchId(Uuid);

impl BatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 默认免费章节数
pub const DEFAULT_FREE_CHAPTERS: u32 = 5;

/// 默认付费章节价格（金币）
pub const DEFAULT_COIN_COST: u32 = 20;

/// 章节定价规则
///
/// 编号不超过 free_chapters 的章节免费，其余按 coin_cost 收费
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterPricing {
    pub free_chapters: u32,
    pub coin_cost: u32,
}

impl Default for ChapterPricing {
    fn default() -> Self {
        Self {
            free_chapters: DEFAULT_FREE_CHAPTERS,
            coin_cost: DEFAULT_COIN_COST,
        }
    }
}

impl ChapterPricing {
    pub fn price_for(&self, number: u32) -> ChapterPrice {
        if number <= self.free_chapters {
            ChapterPrice {
                is_free: true,
                is_premium: false,
                coin_cost: 0,
            }
        } else {
            ChapterPrice {
                is_free: false,
                is_premium: true,
                coin_cost: self.coin_cost,
            }
        }
    }
}

/// 单章价格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPrice {
    pub is_free: bool,
    pub is_premium: bool,
    pub coin_cost: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pricing_boundary() {
        let pricing = ChapterPricing::default();

        let fifth = pricing.price_for(5);
        assert!(fifth.is_free);
        assert_eq!(fifth.coin_cost, 0);

        let sixth = pricing.price_for(6);
        assert!(sixth.is_premium);
        assert!(!sixth.is_free);
        assert_eq!(sixth.coin_cost, 20);
    }

    #[test]
    fn test_everything_paid_when_no_free_chapters() {
        let pricing = ChapterPricing {
            free_chapters: 0,
            coin_cost: 15,
        };
        assert_eq!(pricing.price_for(1).coin_cost, 15);
    }
}
