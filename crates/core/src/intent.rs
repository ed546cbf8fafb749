//! Intent display metadata

/// Intent label returned when no corpus row matches.
pub const OUT_OF_SCOPE: &str = "out_of_scope";

/// Color token used for intents without a dedicated entry.
pub const DEFAULT_INTENT_COLOR: &str = "#757575";

/// Display color for an intent label. Purely presentational; unknown
/// intents get the default token.
pub fn color_for_intent(intent: &str) -> &'static str {
    match intent {
        "greet" => "#4CAF50",
        "goodbye" => "#FF9800",
        "check_balance" => "#2196F3",
        "transaction_inquiry" => "#9C27B0",
        "loan_inquiry" => "#F44336",
        "card_inquiry" => "#00BCD4",
        "block_card" => "#E91E63",
        "branch_locator" => "#795548",
        "transfer_money" => "#FF5722",
        "thanks" => "#8BC34A",
        "out_of_scope" => "#757575",
        _ => DEFAULT_INTENT_COLOR,
    }
}
