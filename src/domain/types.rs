// ==========================================
// 零售库存调货建议生成系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 转货模式 (Transfer Mode)
// ==========================================
// 三档力度递增: A 保守 / B 加强 / C 特强
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransferMode {
    A, // 保守转货 (RF 按安全库存门槛, 50% 上限)
    B, // 加强转货 (RF 按 MOQ 门槛, 90% 上限)
    C, // 特强转货 (RF 免最低库存门槛, 允许跨 OM)
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMode::A => write!(f, "A"),
            TransferMode::B => write!(f, "B"),
            TransferMode::C => write!(f, "C"),
        }
    }
}

impl TransferMode {
    /// 从字符串解析转货模式(大小写不敏感)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" | "CONSERVATIVE" => Some(TransferMode::A),
            "B" | "ENHANCED" => Some(TransferMode::B),
            "C" | "SUPER" => Some(TransferMode::C),
            _ => None,
        }
    }

    /// 模式中文名称(用于日志与报表标题)
    pub fn title(&self) -> &'static str {
        match self {
            TransferMode::A => "保守转货",
            TransferMode::B => "加强转货",
            TransferMode::C => "特强转货",
        }
    }
}

// ==========================================
// 补货类型 (Replenishment Type)
// ==========================================
// ND: 不再主动补货, 有库存即全量转出
// RF: 持续补货, 转出前受最低库存门槛约束
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RpType {
    Nd,
    Rf,
}

impl fmt::Display for RpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpType::Nd => write!(f, "ND"),
            RpType::Rf => write!(f, "RF"),
        }
    }
}

impl RpType {
    /// 从源数据字符串解析(大小写不敏感); 未知值返回 None, 由清洗层决定回退
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ND" => Some(RpType::Nd),
            "RF" => Some(RpType::Rf),
            _ => None,
        }
    }
}

// ==========================================
// 转出类型 (Transfer Type)
// ==========================================
// 排序即优先级: ND 转出先于各档 RF 转出
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferType {
    Nd,         // ND 全量转出 (所有模式, 优先级 1)
    RfExcess,   // RF 过剩转出 (模式 A)
    RfEnhanced, // RF 加强转出 (模式 B)
    RfSuper,    // RF 特强转出 (模式 C)
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferType::Nd => write!(f, "ND Transfer"),
            TransferType::RfExcess => write!(f, "RF Excess Transfer"),
            TransferType::RfEnhanced => write!(f, "RF Enhanced Transfer"),
            TransferType::RfSuper => write!(f, "RF Super Enhanced Transfer"),
        }
    }
}

impl TransferType {
    /// 是否属于 ND 优先级档
    pub fn is_nd(&self) -> bool {
        matches!(self, TransferType::Nd)
    }
}

// ==========================================
// OM 匹配策略 (OM Policy)
// ==========================================
// 模式 A/B: 转出与接收必须同 OM
// 模式 C: 允许跨 OM, 但 HD 不得转入 HA/HB/HC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OmPolicy {
    SameGroup,
    CrossGroupGuarded,
}

impl OmPolicy {
    /// 判定某转出店铺是否允许向某接收店铺调货
    pub fn allows(&self, donor_om: &str, receiver_om: &str) -> bool {
        match self {
            OmPolicy::SameGroup => donor_om == receiver_om,
            OmPolicy::CrossGroupGuarded => {
                !(donor_om == "HD" && matches!(receiver_om, "HA" | "HB" | "HC"))
            }
        }
    }
}

impl fmt::Display for OmPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmPolicy::SameGroup => write!(f, "SAME_GROUP"),
            OmPolicy::CrossGroupGuarded => write!(f, "CROSS_GROUP_GUARDED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_mode_parse() {
        assert_eq!(TransferMode::parse("a"), Some(TransferMode::A));
        assert_eq!(TransferMode::parse(" B "), Some(TransferMode::B));
        assert_eq!(TransferMode::parse("super"), Some(TransferMode::C));
        assert_eq!(TransferMode::parse("D"), None);
    }

    #[test]
    fn test_rp_type_parse() {
        assert_eq!(RpType::parse("nd"), Some(RpType::Nd));
        assert_eq!(RpType::parse(" RF "), Some(RpType::Rf));
        assert_eq!(RpType::parse("XX"), None);
    }

    #[test]
    fn test_transfer_type_display() {
        assert_eq!(TransferType::Nd.to_string(), "ND Transfer");
        assert_eq!(TransferType::RfExcess.to_string(), "RF Excess Transfer");
        assert_eq!(TransferType::RfEnhanced.to_string(), "RF Enhanced Transfer");
        assert_eq!(
            TransferType::RfSuper.to_string(),
            "RF Super Enhanced Transfer"
        );
    }

    #[test]
    fn test_om_policy_same_group() {
        let policy = OmPolicy::SameGroup;
        assert!(policy.allows("G1", "G1"));
        assert!(!policy.allows("G1", "G2"));
    }

    #[test]
    fn test_om_policy_cross_group_guarded() {
        let policy = OmPolicy::CrossGroupGuarded;
        assert!(policy.allows("G1", "G2"));
        assert!(policy.allows("HA", "HD")); // 仅限制 HD 作为转出方
        assert!(policy.allows("HD", "G9"));
        assert!(!policy.allows("HD", "HA"));
        assert!(!policy.allows("HD", "HB"));
        assert!(!policy.allows("HD", "HC"));
    }
}
