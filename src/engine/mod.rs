mod analytics_engine;
#[cfg(test)]
mod tests;

pub use analytics_engine::AnalyticsEngine;
