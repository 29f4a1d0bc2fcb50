//! 注入目标

use crate::services::{ConfigService, EmailService, UserService};
use component_macros::Injectable;
use std::sync::Arc;

/// 演示用注入目标，字段由容器按限定符填充
#[derive(Default, Injectable)]
pub struct Injectables {
    /// 用户服务
    #[inject("userService")]
    pub user_service: Option<Arc<dyn UserService>>,
    /// 邮件服务
    #[inject("emailService")]
    pub email_service: Option<Arc<dyn EmailService>>,
    /// 配置服务
    #[inject(qualifier = "configService")]
    pub config_service: Option<Arc<dyn ConfigService>>,
}
