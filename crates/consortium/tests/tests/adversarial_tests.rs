#[path = "adversarial/double_vote.rs"]
mod double_vote;

#[path = "adversarial/funding_gate.rs"]
mod funding_gate;

#[path = "adversarial/privilege_escalation.rs"]
mod privilege_escalation;

#[path = "adversarial/concurrent_callers.rs"]
mod concurrent_callers;
