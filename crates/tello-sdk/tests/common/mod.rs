//! 集成测试公共设施

pub mod mock_device;
