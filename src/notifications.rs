//! Cross-platform notification support
//! Currently only implements macOS notifications

use crate::domain::Phase;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Notification text announcing the phase that just began
pub fn phase_message(phase: Phase, plan_name: &str) -> String {
    match phase {
        Phase::Fasting => format!("Eating window closed. Your {} fast begins now.", plan_name),
        Phase::Eating => format!("Fast complete! Your {} eating window is open.", plan_name),
    }
}

/// Send a notification when the timer switches phase
pub fn notify_phase_change(phase: Phase, plan_name: &str) {
    let message = phase_message(phase, plan_name);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Fastclock - {}""#,
            message.replace('"', "\\\""),
            phase.name()
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!("failed to send notification: {}", e);
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        tracing::debug!("notification skipped on this platform: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_message() {
        assert!(phase_message(Phase::Eating, "16:8").contains("eating window is open"));
        assert!(phase_message(Phase::Fasting, "20:4").contains("20:4 fast begins"));
    }
}
