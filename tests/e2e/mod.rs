// End-to-end tests for the Sarvam proxy
//
// Each test starts its own stub upstream (standing in for both the Sarvam API
// and the front-end dev server) on an ephemeral port, then the real router
// pointed at it. Tests share nothing and run in parallel.

mod helpers;
mod test_health;
