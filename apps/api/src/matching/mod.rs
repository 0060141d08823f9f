// Matching engine: tokenization, stop-word filtering, skill-phrase detection,
// weighted scoring. Pure functions only; the HTTP and LLM layers sit elsewhere.

pub mod engine;
pub mod suggestions;
