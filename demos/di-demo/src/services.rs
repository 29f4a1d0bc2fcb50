//! 演示服务
//!
//! 每个服务是一个 trait 加一个私有实现，以 `Arc<dyn Trait>` 注册到容器。

use crate::error::DemoError;
use std::sync::Arc;
use tracing::info;

/// 用户服务
pub trait UserService: Send + Sync {
    /// 按 ID 获取用户标识
    fn get_user(&self, id: u64) -> String;
}

/// 邮件服务
pub trait EmailService: Send + Sync {
    /// 发送邮件
    fn send_email(&self, to: &str, message: &str) -> Result<(), DemoError>;
}

/// 配置服务
pub trait ConfigService: Send + Sync {
    /// 获取当前环境描述
    fn get_config(&self) -> String;
}

struct UserServiceImpl {
    prefix: String,
}

impl UserService for UserServiceImpl {
    fn get_user(&self, id: u64) -> String {
        let result = format!("{}{}", self.prefix, id);
        info!(id, prefix = %self.prefix, result = %result, "获取用户");
        result
    }
}

struct EmailServiceImpl {
    server: String,
}

impl EmailService for EmailServiceImpl {
    fn send_email(&self, to: &str, message: &str) -> Result<(), DemoError> {
        info!(to, server = %self.server, message_length = message.len(), "发送邮件");
        println!("Sending email to {} via {}: {}", to, self.server, message);
        info!(to, server = %self.server, "邮件发送成功");
        Ok(())
    }
}

struct ConfigServiceImpl {
    environment: String,
}

impl ConfigService for ConfigServiceImpl {
    fn get_config(&self) -> String {
        let result = format!("Environment: {}", self.environment);
        info!(environment = %self.environment, result = %result, "获取配置");
        result
    }
}

/// 创建用户服务
pub fn new_user_service() -> Arc<dyn UserService> {
    info!(prefix = "USER-", "创建 UserService");
    Arc::new(UserServiceImpl {
        prefix: "USER-".to_string(),
    })
}

/// 创建邮件服务
pub fn new_email_service() -> Arc<dyn EmailService> {
    info!(server = "smtp.example.com", "创建 EmailService");
    Arc::new(EmailServiceImpl {
        server: "smtp.example.com".to_string(),
    })
}

/// 创建配置服务
pub fn new_config_service(environment: &str) -> Arc<dyn ConfigService> {
    info!(environment, "创建 ConfigService");
    Arc::new(ConfigServiceImpl {
        environment: environment.to_string(),
    })
}
