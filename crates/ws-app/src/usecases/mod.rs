pub mod debug_data;
pub mod persist_state;
pub mod root_orchestrator;

pub use debug_data::DebugDataRecorder;
pub use persist_state::StatePersistor;
pub use root_orchestrator::RootOrchestrator;
