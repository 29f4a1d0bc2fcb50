//! 注入绑定表宏实现

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, Attribute, Data, DeriveInput, Expr, Fields, GenericParam,
    Lit, LitStr, Meta, Result, Token,
};

use crate::utils::{find_attribute, is_public};

/// `#[inject(...)]` 字段参数
#[derive(Debug, Clone, PartialEq)]
pub struct InjectArgs {
    /// 服务限定符
    pub qualifier: String,
}

impl Parse for InjectArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        // #[inject("userService")]
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            return Self::from_lit(&lit);
        }

        // #[inject(qualifier = "userService")]
        let meta: Meta = input.parse()?;
        let _ = input.parse::<Option<Token![,]>>()?;
        if !input.is_empty() {
            return Err(input.error("inject 属性只接受一个限定符"));
        }

        match meta {
            Meta::NameValue(nv) if nv.path.is_ident("qualifier") || nv.path.is_ident("name") => {
                match nv.value {
                    Expr::Lit(expr_lit) => match expr_lit.lit {
                        Lit::Str(lit_str) => Self::from_lit(&lit_str),
                        other => Err(syn::Error::new_spanned(other, "限定符必须是字符串")),
                    },
                    other => Err(syn::Error::new_spanned(other, "限定符必须是字符串")),
                }
            }
            other => Err(syn::Error::new_spanned(
                other,
                "不支持的 inject 参数，请使用 #[inject(\"qualifier\")] 或 #[inject(qualifier = \"...\")]",
            )),
        }
    }
}

impl InjectArgs {
    fn from_lit(lit: &LitStr) -> Result<Self> {
        let qualifier = lit.value();
        if qualifier.trim().is_empty() {
            return Err(syn::Error::new_spanned(lit, "限定符不能为空"));
        }
        Ok(Self { qualifier })
    }

    /// 从字段属性解析
    pub fn from_attribute(attr: &Attribute) -> Result<Self> {
        attr.parse_args::<Self>()
    }
}

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    format!("Injectable 只支持具名字段结构体: {struct_name} 是元组结构体"),
                ))
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                format!("注入目标必须是结构体: {struct_name} 是枚举"),
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                format!("注入目标必须是结构体: {struct_name} 是联合体"),
            ))
        }
    };

    let mut bindings = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = ident.to_string();
        let field_ty = &field.ty;

        let binding = match find_attribute(field, "inject") {
            Some(attr) => {
                let qualifier = InjectArgs::from_attribute(attr)?.qualifier;
                quote! {
                    ::di_abstractions::FieldBinding::<Self>::new(
                        #field_name,
                        #qualifier,
                        |target| &target.#ident,
                        |target| &mut target.#ident,
                    )
                }
            }
            None => quote! {
                ::di_abstractions::FieldBinding::<Self>::untagged(
                    #field_name,
                    ::std::any::type_name::<#field_ty>(),
                )
            },
        };

        // 非 pub 字段不可写
        if is_public(&field.vis) {
            bindings.push(binding);
        } else {
            bindings.push(quote! { #binding.restricted() });
        }
    }

    // 类型参数需要满足 Injectable 的 'static 约束
    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(type_param.ident.clone()),
            _ => None,
        })
        .collect();
    {
        let where_clause = generics.make_where_clause();
        for ident in type_params {
            where_clause.predicates.push(syn::parse_quote!(#ident: 'static));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #struct_name #ty_generics #where_clause {
            fn bindings() -> ::std::vec::Vec<::di_abstractions::FieldBinding<Self>> {
                ::std::vec![#(#bindings),*]
            }
        }
    })
}
