//! Prompts sent to the completion model.

/// Build the extraction prompt for one order.
///
/// The model is told to answer with nothing but a JSON array so the reply can
/// be parsed without any cleanup.
pub fn order_extraction_prompt(order_text: &str) -> String {
    format!(
        "You are a helpful assistant that extracts structured data.\n\n\
         Given the food order: \"{order_text}\", extract a JSON list of dictionaries with `item` and `quantity`.\n\n\
         Respond ONLY with a valid JSON list like this:\n\
         [{{\"item\": \"burger\", \"quantity\": 2}}, {{\"item\": \"coke\", \"quantity\": 1}}]\n"
    )
}
