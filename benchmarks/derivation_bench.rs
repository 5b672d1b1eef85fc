// benchmarks/derivation_bench.rs
use inferno_devnet::core::devnet_config::AccountsConfig;
use inferno_devnet::core::testutils::GOERLI_MNEMONIC;
use inferno_devnet::derive_accounts;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[test]
fn benchmark_account_derivation() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let account_count = 105;
    let rounds = 3;
    log::info!("Starting derivation benchmark: {} accounts x {} rounds", account_count, rounds);

    let config = AccountsConfig::new(GOERLI_MNEMONIC, account_count);
    let start = Instant::now();
    let mut last = Vec::new();
    for _ in 0..rounds {
        last = derive_accounts(&config)?;
    }
    let duration = start.elapsed();

    let seconds = duration.as_secs_f64();
    let total = account_count as usize * rounds;
    let per_second = if seconds > 0.0 { total as f64 / seconds } else { 0.0 };

    let summary = format!(
        "Accounts: {}\n\
        Rounds: {}\n\
        Duration: {:.3}s\n\
        Accounts/s: {:.2}\n",
        account_count, rounds, seconds, per_second
    );
    println!("--- Derivation Benchmark ---\n{}", summary);

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let filename = std::env::temp_dir().join(format!("benchmark_results_derivation_{}.log", timestamp));
    match File::create(&filename) {
        Ok(mut file) => {
            if let Err(e) = file.write_all(summary.as_bytes()) {
                eprintln!("Failed to write benchmark log to {}: {}", filename.display(), e);
            } else {
                log::info!("Benchmark results saved to {}", filename.display());
            }
        }
        Err(e) => eprintln!("Failed to create benchmark log file {}: {}", filename.display(), e),
    }

    assert_eq!(last.len(), account_count as usize);
    Ok(())
}
