use component_macros::Injectable;

#[derive(Injectable)]
pub struct Wrapper(pub Option<String>);

fn main() {}
