use component_macros::Injectable;

#[derive(Injectable)]
pub enum Mode {
    Fast,
    Slow,
}

fn main() {}
