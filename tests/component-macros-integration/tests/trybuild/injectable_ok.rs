use component_macros::Injectable;
use di_abstractions::Injectable as _;
use std::sync::Arc;

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

#[derive(Default, Injectable)]
pub struct Target {
    #[inject("greeter")]
    pub greeter: Option<Arc<dyn Greeter>>,
    #[inject(qualifier = "port")]
    pub port: Option<u16>,
    #[inject(name = "secret")]
    secret: Option<String>,
    pub label: String,
}

#[derive(Injectable)]
pub struct Empty;

fn main() {
    let bindings = Target::bindings();
    assert_eq!(bindings.len(), 4);
    assert_eq!(bindings[0].qualifier(), Some("greeter"));
    assert_eq!(bindings[1].qualifier(), Some("port"));
    assert!(!bindings[2].is_writable());
    assert_eq!(bindings[3].qualifier(), None);

    let target = Target::default();
    assert!(target.secret.is_none());
    assert!(target.label.is_empty());
    assert!(Empty::bindings().is_empty());
}
