//! # Quantum-Chain Tax Exemption Benchmarks
//!
//! | Operation | Claim | Target |
//! |-----------|-------|--------|
//! | Single decision | two point lookups | < 10μs |
//! | Batch decision | zone loads cached per call | linear in transfers |
//! | Key-continuation page | independent of position | < 1ms per 100 |
//! | Genesis export | linear in state | < 100ms for 10k members |

use criterion::{criterion_group, criterion_main};

use qc_tests::benchmarks::qc_18_tax_exemption::register_benchmarks;

criterion_group!(benches, register_benchmarks);

criterion_main!(benches);
