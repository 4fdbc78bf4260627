mod detect_orchestrator;

pub use detect_orchestrator::DetectOrchestrator;
