//! trybuild 编译期测试：派生宏展开后的代码能够编译并运行，非结构体目标编译失败

#[test]
fn trybuild_injectable_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/injectable_ok.rs");
    t.pass("tests/trybuild/injectable_generic_ok.rs");
}

#[test]
fn trybuild_injectable_rejects_non_structs() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/trybuild/injectable_enum_fail.rs");
    t.compile_fail("tests/trybuild/injectable_tuple_fail.rs");
    t.compile_fail("tests/trybuild/injectable_union_fail.rs");
}
