// Career Companion: keyword-routed career chat. Routing is plain keyword
// matching; everything conversational is delegated to the oracle.

pub mod companion;
pub mod handlers;
pub mod intent;
pub mod prompts;
