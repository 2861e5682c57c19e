mod dashboard;

pub use dashboard::dashboard;
