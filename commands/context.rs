use crate::config::RailAreaConfig;
use crate::detector::AreaDetector;
use crate::storage::StationStorage;

/// 命令执行所需的全部状态
#[derive(Debug)]
pub struct RailContext {
    pub config: RailAreaConfig,
    pub storage: StationStorage,
    pub detector: AreaDetector,
}

impl RailContext {
    pub fn new(config: RailAreaConfig, storage: StationStorage) -> Self {
        let detector = AreaDetector::new(&config, &storage);
        Self {
            config,
            storage,
            detector,
        }
    }

    /// 由当前存储重建检测器
    pub fn rebuild(&mut self) {
        self.detector.reload(&self.config, &self.storage);
    }
}
