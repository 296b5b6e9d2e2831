pub mod mocks;

#[allow(unused_imports)]
pub use mocks::MockSink;

/// Routes `log` output of the converters to the test harness.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
