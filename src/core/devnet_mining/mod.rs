// src/core/devnet_mining/mod.rs

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Deserialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use crate::core::devnet_config::{BlockInterval, MempoolOrder, MiningConfig, NetworkProfile, MIN_BLOCK_GAS_LIMIT};
use crate::core::error::DevnetError;

pub const CHANNEL_CAPACITY: usize = 100;

// Platzhalter-Deadline, wenn kein Intervall aktiv ist (Zweig wird nie gepollt)
const IDLE_TIMER: Duration = Duration::from_secs(86_400);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransaction {
    pub id: u64,
    pub gas: u64,
    pub gas_price: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTrigger {
    Transaction,
    Interval,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProducedBlock {
    pub number: u64,
    pub trigger: BlockTrigger,
    pub transactions: Vec<u64>,
    pub gas_used: u64,
}

/// Taktgeber für die Blockproduktion eines Profils.
#[derive(Debug, Clone)]
pub struct BlockCadence {
    mining: MiningConfig,
    block_gas_limit: u64,
}

impl BlockCadence {
    pub fn new(mining: MiningConfig, block_gas_limit: u64) -> Result<Self, DevnetError> {
        mining.validate()?;
        if block_gas_limit < MIN_BLOCK_GAS_LIMIT {
            return Err(DevnetError::Validation(format!(
                "blockGasLimit {} is below the minimum of {}",
                block_gas_limit, MIN_BLOCK_GAS_LIMIT
            )));
        }
        Ok(Self { mining, block_gas_limit })
    }

    #[inline]
    pub fn from_profile(profile: &NetworkProfile) -> Result<Self, DevnetError> {
        Self::new(profile.mining, profile.block_gas_limit)
    }

    #[inline]
    pub fn mining(&self) -> &MiningConfig {
        &self.mining
    }

    /// Nächste Wartezeit: fest oder gleichverteilt im Bereich.
    pub fn next_interval<R: Rng>(&self, rng: &mut R) -> Option<Duration> {
        self.mining.effective_interval().map(|interval| match interval {
            BlockInterval::Fixed(ms) => Duration::from_millis(ms),
            BlockInterval::Range([min, max]) => Duration::from_millis(rng.gen_range(min..=max)),
        })
    }

    fn order_mempool(&self, mempool: &mut Vec<PendingTransaction>) {
        if self.mining.mempool.order == MempoolOrder::Priority {
            // stabil: gleiche Preise behalten die Ankunftsreihenfolge
            mempool.sort_by(|a, b| b.gas_price.cmp(&a.gas_price));
        }
    }

    /// Füllt einen Block bis zur Gas-Obergrenze; Rest bleibt im Mempool.
    fn fill_block(&self, mempool: &mut Vec<PendingTransaction>) -> (Vec<u64>, u64) {
        self.order_mempool(mempool);
        let mut included = Vec::new();
        let mut gas_used = 0u64;
        let mut remaining = Vec::with_capacity(mempool.len());
        for tx in mempool.drain(..) {
            // Summe kann bei blockGasLimit nahe u64::MAX überlaufen
            match gas_used.checked_add(tx.gas) {
                Some(total) if total <= self.block_gas_limit => {
                    gas_used = total;
                    included.push(tx.id);
                }
                _ => remaining.push(tx),
            }
        }
        *mempool = remaining;
        (included, gas_used)
    }

    /// Startet die Blockproduktion. Endet, wenn der Block-Empfänger wegfällt
    /// oder der Transaktionskanal schließt und kein Intervall aktiv ist.
    pub fn spawn(
        self,
        mut pending_rx: mpsc::Receiver<PendingTransaction>,
    ) -> (mpsc::Receiver<ProducedBlock>, JoinHandle<Result<u64, DevnetError>>) {
        let (block_tx, block_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let handle = tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let interval_enabled = self.mining.effective_interval().is_some();
            let first = self.next_interval(&mut rng).unwrap_or(IDLE_TIMER);
            let timer = sleep(first);
            tokio::pin!(timer);

            let mut mempool: Vec<PendingTransaction> = Vec::new();
            let mut inbox_open = true;
            let mut number = 0u64;
            info!(
                "Block cadence started: auto={}, interval={:?}, blockGasLimit={}",
                self.mining.auto, self.mining.effective_interval(), self.block_gas_limit
            );

            loop {
                if !inbox_open && !interval_enabled {
                    break;
                }
                let block = tokio::select! {
                    received = pending_rx.recv(), if inbox_open => match received {
                        Some(tx) if tx.gas > self.block_gas_limit => {
                            warn!("Dropping tx {}: gas {} exceeds blockGasLimit {}", tx.id, tx.gas, self.block_gas_limit);
                            None
                        }
                        Some(tx) if self.mining.auto => {
                            number += 1;
                            Some(ProducedBlock {
                                number,
                                trigger: BlockTrigger::Transaction,
                                transactions: vec![tx.id],
                                gas_used: tx.gas,
                            })
                        }
                        Some(tx) => {
                            debug!("Queued tx {} for the next interval block", tx.id);
                            mempool.push(tx);
                            None
                        }
                        None => {
                            debug!("Pending transaction channel closed");
                            inbox_open = false;
                            None
                        }
                    },
                    _ = &mut timer, if interval_enabled => {
                        let (transactions, gas_used) = self.fill_block(&mut mempool);
                        let delay = self.next_interval(&mut rng).unwrap_or(IDLE_TIMER);
                        timer.as_mut().reset(Instant::now() + delay);
                        number += 1;
                        Some(ProducedBlock { number, trigger: BlockTrigger::Interval, transactions, gas_used })
                    }
                };

                if let Some(block) = block {
                    debug!(
                        "Produced block {} ({:?}) with {} tx, gas {}",
                        block.number, block.trigger, block.transactions.len(), block.gas_used
                    );
                    if block_tx.send(block).await.is_err() {
                        debug!("Block receiver dropped, stopping cadence");
                        break;
                    }
                }
            }
            info!("Block cadence stopped after {} block(s)", number);
            Ok(number)
        });
        (block_rx, handle)
    }
}
