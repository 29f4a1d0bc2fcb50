//! # Component Macros
//!
//! 为注入目标生成字段绑定表的过程宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`](derive@Injectable) - 根据 `#[inject]` 字段属性实现 `di_abstractions::Injectable`
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::Injectable;
//! use std::sync::Arc;
//!
//! #[derive(Default, Injectable)]
//! pub struct Injectables {
//!     #[inject("userService")]
//!     pub user_service: Option<Arc<dyn UserService>>,
//!     #[inject(qualifier = "emailService")]
//!     pub email_service: Option<Arc<dyn EmailService>>,
//!     pub untouched: Option<String>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 注入目标派生宏
///
/// 为具名字段结构体实现 `Injectable`，绑定表按字段声明顺序生成：
///
/// - `#[inject("qualifier")]` 或 `#[inject(qualifier = "...")]` 标记的字段按限定符注入，
///   字段类型必须实现 `InjectSlot`（通常是 `Option<Arc<dyn Trait>>`）
/// - 非 `pub` 的带限定符字段被视为不可写，注入时跳过
/// - 没有属性的字段只出现在绑定表中，不会被注入
///
/// 枚举、联合体和元组结构体会产生编译错误。
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(injectable::derive_injectable_impl(input))
}
