//! Proptest generators for property-based testing.

use proptest::prelude::*;

use medchain_core::Chain;

use crate::fixtures::ChainFixture;

/// Generate a patient identifier.
pub fn patient_id() -> impl Strategy<Value = String> {
    "P[0-9]{1,6}".prop_map(String::from)
}

/// Generate a free-form record payload, including non-ASCII and escapes.
pub fn record_data() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 /]{1,40}".prop_map(String::from),
        any::<String>(),
        Just("line\nbreak \"quoted\" \\ é".to_string()),
    ]
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800_000i64
}

/// One operation against a chain.
#[derive(Debug, Clone)]
pub enum ChainOp {
    Append {
        patient_id: String,
        record_data: String,
    },
    /// `slot` is reduced modulo the chain length at replay time.
    Tamper { slot: usize, record_data: String },
}

impl Arbitrary for ChainOp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            3 => (patient_id(), record_data()).prop_map(|(patient_id, record_data)| {
                ChainOp::Append {
                    patient_id,
                    record_data,
                }
            }),
            1 => (any::<usize>(), record_data())
                .prop_map(|(slot, record_data)| ChainOp::Tamper { slot, record_data }),
        ]
        .boxed()
    }
}

/// Replay operations on a fixture clock.
///
/// Tampers against an empty chain are skipped.
pub fn chain_from_ops(ops: &[ChainOp]) -> Chain {
    let mut fixture = ChainFixture::new();
    for op in ops {
        match op {
            ChainOp::Append {
                patient_id,
                record_data,
            } => {
                fixture.append(patient_id, record_data);
            }
            ChainOp::Tamper { slot, record_data } => {
                if !fixture.chain.is_empty() {
                    let index = slot % fixture.chain.len();
                    fixture.tamper(index, record_data);
                }
            }
        }
    }
    fixture.chain
}
