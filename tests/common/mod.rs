use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

#[allow(dead_code)]
pub const LINKING_CSV: &str = "\
StockSKU,Sub Source,ChannelSKU
SKU1,EBAY0,E-100
SKU1,Stc Stores,A-200
SKU2,EBAY0,E-300
SKU2,STC Stores Germany,D-300
SKU3,stcstores.co.uk (shopify),S-1
SKU3,EBAY0,E-300
";

#[allow(dead_code)]
pub fn write_linking_csv(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("linking.csv");
    std::fs::write(&path, LINKING_CSV).context("write linking.csv")?;
    Ok(path)
}

#[allow(dead_code)]
pub struct Output {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in `cwd` so no ambient `.skulink` config is picked up.
#[allow(dead_code)]
pub fn run_skulink(cwd: &Path, args: &[&str]) -> Result<Output> {
    let out = Command::new(env!("CARGO_BIN_EXE_skulink"))
        .args(args)
        .current_dir(cwd)
        .env_remove("SKULINK_TOKEN")
        .env_remove("SKULINK_LOG")
        .output()
        .with_context(|| format!("run skulink {:?}", args))?;
    Ok(Output {
        success: out.status.success(),
        stdout: String::from_utf8_lossy(&out.stdout).to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).to_string(),
    })
}

#[allow(dead_code)]
pub fn run_skulink_ok(cwd: &Path, args: &[&str]) -> Result<String> {
    let out = run_skulink(cwd, args)?;
    if !out.success {
        anyhow::bail!(
            "skulink {:?} failed\nstdout:\n{}\nstderr:\n{}",
            args,
            out.stdout,
            out.stderr
        );
    }
    Ok(out.stdout)
}

#[allow(dead_code)]
pub struct ServerGuard {
    pub base_url: String,
    _data_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[allow(dead_code)]
pub fn spawn_server() -> Result<ServerGuard> {
    let data_dir = tempfile::tempdir().context("create server tempdir")?;
    let csv = write_linking_csv(data_dir.path())?;
    let addr_file = data_dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_skulink-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().context("addr file path")?,
            "--file",
            csv.to_str().context("csv path")?,
        ])
        .current_dir(data_dir.path())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn skulink-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        _data_dir: data_dir,
        child,
    })
}

#[allow(dead_code)]
fn read_addr_file(addr_file: &Path) -> Result<String> {
    let addr = poll_until(Duration::from_millis(10), || {
        let s = std::fs::read_to_string(addr_file).ok()?;
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    })
    .with_context(|| format!("addr file not written at {}", addr_file.display()))?;
    Ok(format!("http://{}", addr))
}

#[allow(dead_code)]
pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let url = format!("{}/healthz", base_url);
    poll_until(Duration::from_millis(50), || {
        let resp = client.get(&url).send().ok()?;
        resp.status().is_success().then_some(())
    })
    .with_context(|| format!("server did not become healthy at {}", url))
}

/// Calls `probe` every `interval` until it yields a value, for up to 5s.
#[allow(dead_code)]
fn poll_until<T>(interval: Duration, mut probe: impl FnMut() -> Option<T>) -> Result<T> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(value) = probe() {
            return Ok(value);
        }
        if Instant::now() > deadline {
            anyhow::bail!("timed out after 5s");
        }
        thread::sleep(interval);
    }
}
