// ==========================================
// 零售库存调货建议生成系统 - 需求解析器
// ==========================================
// 职责: 构建产品组接收池与产品级总需求上限
// 余量计数器为匹配过程的本地可变状态, 不回写 InventoryRecord
// ==========================================

use crate::domain::transfer::ReceiverDescriptor;

// ==========================================
// ReceiverEntry - 接收池条目
// ==========================================
#[derive(Debug, Clone)]
pub struct ReceiverEntry {
    pub descriptor: ReceiverDescriptor,
    /// 剩余未满足需求, 匹配器逐笔扣减; 归零即退出接收池
    pub remaining_need: u32,
}

// ==========================================
// ReceiverPool - 产品组接收池
// ==========================================
// 条目按店铺编号升序, 保证匹配顺序确定
#[derive(Debug, Clone)]
pub struct ReceiverPool {
    entries: Vec<ReceiverEntry>,
    total_demand: u64,
}

impl ReceiverPool {
    /// 产品级总需求上限(聚合转出量的硬上限)
    pub fn total_demand(&self) -> u64 {
        self.total_demand
    }

    pub fn entries(&self) -> &[ReceiverEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [ReceiverEntry] {
        &mut self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 剩余未满足需求总量
    pub fn unmet_need(&self) -> u64 {
        self.entries.iter().map(|e| e.remaining_need as u64).sum()
    }

    /// 全部接收需求是否已满足
    pub fn is_satisfied(&self) -> bool {
        self.entries.iter().all(|e| e.remaining_need == 0)
    }
}

// ==========================================
// DemandResolver - 需求解析器
// ==========================================
pub struct DemandResolver;

impl DemandResolver {
    pub fn new() -> Self {
        Self
    }

    /// 构建接收池
    ///
    /// # 规则
    /// - total_demand = Σ target(全部接收候选, 跨 OM)
    /// - 各接收方初始余量 = 自身 target
    /// - 条目按店铺编号升序(确定性)
    pub fn resolve(&self, mut receivers: Vec<ReceiverDescriptor>) -> ReceiverPool {
        receivers.sort_by(|a, b| a.site.cmp(&b.site));

        let total_demand = receivers.iter().map(|r| r.initial_need() as u64).sum();
        let entries = receivers
            .into_iter()
            .map(|descriptor| {
                let remaining_need = descriptor.initial_need();
                ReceiverEntry {
                    descriptor,
                    remaining_need,
                }
            })
            .collect();

        ReceiverPool {
            entries,
            total_demand,
        }
    }
}

impl Default for DemandResolver {
    fn default() -> Self {
        Self::new()
    }
}
