//! di-impl 集中集成测试
use component_macros::Injectable;
use di_abstractions::{DiContainer, ServiceRegistry, ServiceResolver};
use di_impl::Container;
use infrastructure_common::DependencyError;
use std::sync::Arc;
use std::thread;

/// 测试用户服务
trait UserService: Send + Sync {
    fn get_user(&self, id: u64) -> String;
}

struct PrefixedUserService {
    prefix: &'static str,
}

impl UserService for PrefixedUserService {
    fn get_user(&self, id: u64) -> String {
        format!("{}{}", self.prefix, id)
    }
}

fn user_service() -> Arc<dyn UserService> {
    Arc::new(PrefixedUserService { prefix: "USER-" })
}

#[derive(Default, Injectable)]
struct Consumer {
    #[inject("userService")]
    pub user_service: Option<Arc<dyn UserService>>,
}

#[derive(Default, Injectable)]
struct Mixed {
    #[inject("userService")]
    pub user_service: Option<Arc<dyn UserService>>,
    #[inject("missing")]
    pub missing: Option<Arc<dyn UserService>>,
    #[inject("userService")]
    private: Option<Arc<dyn UserService>>,
    pub untouched: Option<Arc<dyn UserService>>,
}

#[derive(Default, Injectable)]
struct WrongType {
    #[inject("userService")]
    pub first: Option<Arc<dyn UserService>>,
    #[inject("port")]
    pub port: Option<String>,
    #[inject("userService")]
    pub last: Option<Arc<dyn UserService>>,
}

#[test]
fn test_user_service_scenario() -> anyhow::Result<()> {
    let container = Container::new();
    container.register("userService", user_service())?;

    let mut consumer = Consumer::default();
    container.inject(&mut consumer)?;

    let service = consumer.user_service.expect("userService 应已注入");
    assert_eq!(service.get_user(123), "USER-123");
    Ok(())
}

#[test]
fn test_unregistered_dependency_is_optional() -> anyhow::Result<()> {
    let container = Container::new();

    let mut consumer = Consumer::default();
    container.inject(&mut consumer)?;

    assert!(consumer.user_service.is_none());
    Ok(())
}

#[test]
fn test_injected_instance_is_the_registered_one() -> anyhow::Result<()> {
    let container = Container::new();
    let registered = user_service();
    container.register("userService", registered.clone())?;

    let mut mixed = Mixed::default();
    let untouched = user_service();
    mixed.untouched = Some(untouched.clone());
    container.inject(&mut mixed)?;

    assert!(Arc::ptr_eq(mixed.user_service.as_ref().unwrap(), &registered));
    assert!(mixed.missing.is_none());
    assert!(mixed.private.is_none());
    assert!(Arc::ptr_eq(mixed.untouched.as_ref().unwrap(), &untouched));
    Ok(())
}

#[test]
fn test_type_mismatch_leaves_later_fields() -> anyhow::Result<()> {
    let container = Container::new();
    container.register("userService", user_service())?;
    container.register("port", 8080_u16)?;

    let mut target = WrongType::default();
    let err = container.inject(&mut target).unwrap_err();

    assert_eq!(
        err,
        DependencyError::type_mismatch("port", "String", "u16")
    );
    assert!(target.first.is_some());
    assert!(target.port.is_none());
    assert!(target.last.is_none());
    Ok(())
}

#[test]
fn test_concrete_registration_does_not_fill_trait_slot() -> anyhow::Result<()> {
    let container = Container::new();
    container.register("userService", Arc::new(PrefixedUserService { prefix: "USER-" }))?;

    let mut consumer = Consumer::default();
    let err = container.inject(&mut consumer).unwrap_err();

    assert_eq!(
        err,
        DependencyError::type_mismatch(
            "user_service",
            "Arc<dyn UserService>",
            "Arc<PrefixedUserService>"
        )
    );
    assert!(consumer.user_service.is_none());
    Ok(())
}

#[test]
fn test_duplicate_and_absent_registration() -> anyhow::Result<()> {
    let container = Container::new();
    let original = user_service();
    container.register("userService", original.clone())?;

    let err = container.register("userService", user_service()).unwrap_err();
    assert!(matches!(err, DependencyError::DuplicateQualifier { .. }));

    let err = container
        .register_optional::<Arc<dyn UserService>>("nothing", None)
        .unwrap_err();
    assert!(matches!(err, DependencyError::InvalidService { .. }));
    assert!(container.resolve("nothing").unwrap_err().is_not_found());

    let resolved: Arc<dyn UserService> = container.resolve_as("userService")?;
    assert!(Arc::ptr_eq(&resolved, &original));
    assert_eq!(container.len(), 1);
    Ok(())
}

#[test]
fn test_inject_through_trait_object() -> anyhow::Result<()> {
    let container = Container::new();
    container.register("userService", user_service())?;

    let dyn_container: &dyn DiContainer = &container;
    let mut consumer = Consumer::default();
    dyn_container.inject_struct(Some(&mut consumer))?;
    assert!(consumer.user_service.is_some());

    let err = dyn_container.inject_struct(None).unwrap_err();
    assert!(matches!(err, DependencyError::InvalidTarget { .. }));
    Ok(())
}

#[test]
fn test_concurrent_registration() {
    const THREADS: usize = 16;
    const PER_THREAD: usize = 32;

    let container = Container::new();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let container = &container;
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    let qualifier = format!("service-{t}-{i}");
                    container.register(&qualifier, t * PER_THREAD + i).unwrap();
                }
            });
        }
    });

    assert_eq!(container.len(), THREADS * PER_THREAD);
    for t in 0..THREADS {
        for i in 0..PER_THREAD {
            let value: usize = container.resolve_as(&format!("service-{t}-{i}")).unwrap();
            assert_eq!(value, t * PER_THREAD + i);
        }
    }
}

#[test]
fn test_concurrent_duplicate_registration_has_one_winner() {
    const THREADS: usize = 8;

    let container = Container::new();

    let successes: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let container = container.clone();
                scope.spawn(move || container.register("shared", t).is_ok())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| usize::from(handle.join().unwrap()))
            .sum()
    });

    assert_eq!(successes, 1);
    assert_eq!(container.len(), 1);
    assert!(container.contains("shared"));
}

#[test]
fn test_concurrent_resolve_and_inject() -> anyhow::Result<()> {
    let container = Container::new();
    let registered = user_service();
    container.register("userService", registered.clone())?;

    thread::scope(|scope| {
        for _ in 0..8 {
            let container = &container;
            let registered = &registered;
            scope.spawn(move || {
                let mut consumer = Consumer::default();
                container.inject(&mut consumer).unwrap();
                assert!(Arc::ptr_eq(consumer.user_service.as_ref().unwrap(), registered));
            });
        }
    });
    Ok(())
}
