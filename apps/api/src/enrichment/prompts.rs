// LLM prompt constants for the catalog enrichment flow.

/// Enrichment prompt header. One listing line is appended per laptop.
pub const ANALYZE_PROMPT_HEADER: &str = r#"You are an expert in data analysis and preparation for AI recommendation engines.

You are given a list of laptops with their name, URL, price and brand. Some data may be missing or inconsistent.

Analyze this data and prepare it for a laptop recommendation engine. Extract the following specs where they can be determined:
- Processor (brand and model)
- Graphics Card (brand and model)
- Display Resolution
- Weight

If any information is missing, make reasonable assumptions based on the available data and common laptop specifications. If the data is inconsistent, prioritize the most reliable information.

Return a JSON object with exactly this shape:
{"analyzedData": "<the analyzed laptop data, with gaps filled and inconsistencies resolved>"}

Here is the laptop data:
"#;
