//! # 依赖注入演示应用
//!
//! 注册三个示例服务，注入到 [`Injectables`]，打印检查结果并调用服务。

mod error;
mod inspector;
mod logging;
mod models;
mod services;
mod settings;

use clap::Parser;
use di_abstractions::{DiContainer, ServiceRegistry};
use di_impl::Container;
use error::DemoError;
use inspector::Inspector;
use models::Injectables;
use settings::{DemoConfig, DEFAULT_CONFIG_PATH};
use tracing::{error, info};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "di-demo")]
#[command(about = "依赖注入容器演示")]
struct Args {
    /// 配置文件路径（不含扩展名）
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// 日志级别，覆盖配置文件
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = DemoConfig::load(&args.config)?;
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    logging::init(&config)?;

    info!("启动应用");
    if let Err(e) = run(&config) {
        error!(error = %e, "应用运行失败");
        return Err(e.into());
    }

    info!("应用运行完成");
    Ok(())
}

fn run(config: &DemoConfig) -> Result<(), DemoError> {
    info!("初始化依赖注入容器");
    let container = Container::new();
    register_services(&container, config)?;

    info!("注入依赖");
    let injectables = wire(&container)?;

    info!("检查注入目标");
    let inspector = Inspector::new();
    let info = inspector.inspect(&injectables);
    println!("{}", inspector.pretty_print(&info));

    info!("测试注入的服务");
    exercise(&injectables)
}

/// 注册示例服务
fn register_services(container: &Container, config: &DemoConfig) -> Result<(), DemoError> {
    container.register("userService", services::new_user_service())?;
    container.register("emailService", services::new_email_service())?;
    container.register(
        "configService",
        services::new_config_service(&config.environment),
    )?;
    Ok(())
}

/// 创建并注入目标
fn wire(container: &Container) -> Result<Injectables, DemoError> {
    let mut injectables = Injectables::default();
    container.inject(&mut injectables)?;
    Ok(injectables)
}

fn exercise(injectables: &Injectables) -> Result<(), DemoError> {
    if let Some(user_service) = &injectables.user_service {
        let result = user_service.get_user(123);
        info!(result = %result, "UserService 测试完成");
    }

    if let Some(email_service) = &injectables.email_service {
        email_service.send_email("test@example.com", "Hello from DI!")?;
        info!("EmailService 测试完成");
    }

    if let Some(config_service) = &injectables.config_service {
        let result = config_service.get_config();
        info!(result = %result, "ConfigService 测试完成");
    }

    Ok(())
}
