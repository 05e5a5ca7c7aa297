pub mod app;
pub mod runtimes;

#[cfg(test)]
mod test_support;
