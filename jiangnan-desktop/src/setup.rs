use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use anyhow::Context;
use env_logger::{Builder, Target};
use jiangnan_core::config::SystemConfig;
use crate::config_gen;

pub const CONFIG_PATH: &str = "config.toml";

pub fn init() -> anyhow::Result<()> {
    config_gen::ensure_config_exists(CONFIG_PATH)?;

    if let Err(e) = jiangnan_shared::config::init(CONFIG_PATH) {
        eprintln!("Config load warning: {}", e);
    }

    init_logger()
}

struct TeeWriter<W1, W2>(W1, W2);

impl<W1: Write, W2: Write> Write for TeeWriter<W1, W2> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.0.write(buf)?;
        self.1.write_all(&buf[..n])?;
        Ok(n)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()?;
        self.1.flush()?;
        Ok(())
    }
}

fn init_logger() -> anyhow::Result<()> {
    let sys_cfg: SystemConfig = jiangnan_shared::config::get("system");
    fs::create_dir_all(&sys_cfg.log_path)
        .with_context(|| format!("Failed to create log dir '{}'", sys_cfg.log_path))?;

    let log_file_path = std::path::Path::new(&sys_cfg.log_path).join("jiangnan.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("Failed to open log file {:?}", log_file_path))?;

    Builder::from_env(env_logger::Env::default().default_filter_or(&sys_cfg.log_level))
        .target(Target::Pipe(Box::new(TeeWriter(std::io::stdout(), log_file))))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tee_writes_both_sides() {
        let mut tee = TeeWriter(Vec::new(), Vec::new());
        tee.write_all(b"hello").unwrap();
        tee.flush().unwrap();
        assert_eq!(tee.0, b"hello");
        assert_eq!(tee.1, b"hello");
    }
}
