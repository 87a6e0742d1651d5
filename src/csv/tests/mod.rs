mod writer;

/// 测试时打开日志输出（重复调用无副作用）
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
