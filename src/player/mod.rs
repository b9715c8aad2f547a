pub mod actor;
pub mod ai;
pub mod controller;
pub mod relay;

pub use actor::{run_actor, Termination, TurnSignal};
pub use ai::{AggressiveAI, EvaderAI, InterceptorAI};
pub use controller::Strategy;
pub use relay::{relay, RelayReceiver, RelaySender};
