pub mod trainer;
pub mod iteration_stats;
pub mod step_prompt;
pub mod train_config;

pub use trainer::Trainer;
pub use iteration_stats::IterationStats;
pub use step_prompt::StepPrompt;
pub use train_config::TrainConfig;
