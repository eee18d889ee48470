//! Nutri-Score MCP Server Implementation
//!
//! Exposes the scoring tools over the Model Context Protocol.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServiceConfig;
use crate::models::{CanonicalNutrients, RawNutrientRecord, ServingSize};
use crate::tools::nutriscore::{self, FoodEntry};
use crate::tools::status::StatusTracker;

/// Nutri-Score MCP Service
#[derive(Clone)]
pub struct NutriScoreService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: ServiceConfig,
    tool_router: ToolRouter<NutriScoreService>,
}

impl NutriScoreService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config))),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// Nutrition facts for one serving, as printed on the label
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct LabelFactsParams {
    /// Serving amount (e.g., 30)
    pub serving_size: f64,
    /// Serving unit: g, ml, oz, cup, tbsp, or annotated like "bar (45g)" (default g)
    #[serde(default = "default_serving_unit")]
    pub serving_unit: String,
    /// Energy in kcal
    pub calories: f64,
    /// Saturated fat in grams
    #[serde(default)]
    pub saturated_fat: f64,
    /// Total sugars in grams
    #[serde(default)]
    pub total_sugars: f64,
    /// Sodium in milligrams
    #[serde(default)]
    pub sodium: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein: f64,
    /// Dietary fiber in grams
    #[serde(default)]
    pub dietary_fiber: f64,
    /// Fruit/vegetable/legume/nut content, 0-100 (default 0)
    pub fruit_veg_percent: Option<f64>,
    /// Whether the product is a cheese (default false)
    pub is_cheese: Option<bool>,
}

fn default_serving_unit() -> String { "g".to_string() }

impl LabelFactsParams {
    fn into_record(self) -> RawNutrientRecord {
        RawNutrientRecord::from_label(
            ServingSize::new(self.serving_size, self.serving_unit),
            self.calories,
            self.saturated_fat,
            self.total_sugars,
            self.sodium,
            self.protein,
            self.dietary_fiber,
            self.fruit_veg_percent,
            self.is_cheese,
        )
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScoreNutrientsParams {
    /// Energy per 100g in kJ
    pub energy_kj: f64,
    /// Saturated fat per 100g in grams
    #[serde(default)]
    pub saturated_fat_g: f64,
    /// Sugars per 100g in grams
    #[serde(default)]
    pub sugars_g: f64,
    /// Salt per 100g in grams
    #[serde(default)]
    pub salt_g: f64,
    /// Protein per 100g in grams
    #[serde(default)]
    pub protein_g: f64,
    /// Fiber per 100g in grams
    #[serde(default)]
    pub fiber_g: f64,
    /// Fruit/vegetable/legume/nut content, 0-100 (default 0)
    pub fruit_veg_percent: Option<f64>,
    /// Whether the product is a cheese (default false)
    pub is_cheese: Option<bool>,
}

impl From<ScoreNutrientsParams> for CanonicalNutrients {
    fn from(p: ScoreNutrientsParams) -> Self {
        Self {
            energy_kj: p.energy_kj,
            saturated_fat_g: p.saturated_fat_g,
            sugars_g: p.sugars_g,
            salt_g: p.salt_g,
            protein_g: p.protein_g,
            fiber_g: p.fiber_g,
            fruit_veg_percent: p.fruit_veg_percent.unwrap_or(0.0),
            is_cheese: p.is_cheese.unwrap_or(false),
        }
    }
}

/// A named food for batch scoring
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodParams {
    /// Food name
    pub name: String,
    /// Category (e.g., "cereal", "snack")
    pub category: Option<String>,
    /// Free-form note
    pub note: Option<String>,
    /// Where the label data came from
    pub source: Option<String>,
    #[serde(flatten)]
    pub facts: LabelFactsParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScoreFoodsParams {
    /// Foods to score
    pub foods: Vec<FoodParams>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl NutriScoreService {
    // --- Status ---

    #[tool(description = "Get the current status of the Nutri-Score service including build info, active profile, configuration, and process information")]
    async fn nutriscore_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for grading foods. Call this when unsure which Nutri-Score tool to use or which units the label fields take.")]
    fn nutriscore_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::NUTRISCORE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(NUTRISCORE_INSTRUCTIONS)]))
    }

    // --- Scoring ---

    #[tool(description = "Convert per-serving label facts to per-100g values (kJ, g, g salt) without scoring")]
    fn normalize_nutrients(&self, Parameters(p): Parameters<LabelFactsParams>) -> Result<CallToolResult, McpError> {
        let result = nutriscore::normalize_nutrients(&self.config, &p.into_record())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Score nutrient values that are already per 100g. Returns component points, A/C totals, final score, letter grade and colors.")]
    fn score_nutrients(&self, Parameters(p): Parameters<ScoreNutrientsParams>) -> Result<CallToolResult, McpError> {
        let result = nutriscore::score_nutrients(&self.config, &p.into())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Calculate the Nutri-Score (A-E) of a food from its per-serving label facts. Sodium is in mg, calories in kcal.")]
    fn calculate_nutri_score(&self, Parameters(p): Parameters<LabelFactsParams>) -> Result<CallToolResult, McpError> {
        let result = nutriscore::calculate_nutri_score(&self.config, &p.into_record())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Score several foods at once and rank them best first. Entries with invalid data are reported as skipped.")]
    fn score_foods(&self, Parameters(p): Parameters<ScoreFoodsParams>) -> Result<CallToolResult, McpError> {
        let foods = p
            .foods
            .into_iter()
            .map(|f| FoodEntry {
                name: f.name,
                category: f.category,
                note: f.note,
                source: f.source,
                record: f.facts.into_record(),
            })
            .collect();
        let result = nutriscore::score_foods(&self.config, foods)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get the Nutri-Score grade bands (score ranges) with display and text colors")]
    fn grade_scale(&self) -> Result<CallToolResult, McpError> {
        to_json(&nutriscore::grade_scale())
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriScoreService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutriscore".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutri-Score Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutri-Score Calculator - grades foods A (best) to E (worst) from label nutrition facts \
                 using the 2022 main foods algorithm. \
                 Call nutriscore_instructions first if unsure. \
                 Grading: calculate_nutri_score (per-serving label facts), score_nutrients (per-100g values), \
                 score_foods (batch ranking). \
                 Helpers: normalize_nutrients, grade_scale, nutriscore_status."
                    .into(),
            ),
        }
    }
}
