//! Tool implementations for the weather MCP server.

use crate::WeatherServer;
use crate::report::{WeatherReport, synthesize_at};
use crate::validate::validate_date;
use chrono::{DateTime, Utc};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

/// Parameters for the `get_shanghai_weather` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetShanghaiWeatherParams {
    /// 可选，日期格式 YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,
}

/// Payload returned by `get_shanghai_weather`, as text and as structured
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<WeatherReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WeatherResponse {
    fn ok(data: WeatherReport) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

/// Validate `date` and synthesize its report, using `now` when no date is
/// given. An empty string counts as no date.
pub fn lookup(date: Option<&str>, now: DateTime<Utc>) -> WeatherResponse {
    let date = match date.filter(|d| !d.is_empty()).map(validate_date) {
        None => None,
        Some(Ok(date)) => Some(date),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "rejected weather date");
            return WeatherResponse::failed(e);
        }
    };
    WeatherResponse::ok(synthesize_at(date, now))
}

#[tool_router]
impl WeatherServer {
    /// Create a new weather server.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Mock Shanghai weather for an optional date.
    #[tool(description = "获取上海天气的 Mock 数据，可选按日期查询（YYYY-MM-DD）。")]
    async fn get_shanghai_weather(
        &self,
        Parameters(params): Parameters<GetShanghaiWeatherParams>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!(date = ?params.date, "get_shanghai_weather");
        let response = lookup(params.date.as_deref(), Utc::now());
        // Text keeps field order; a `Value` map would sort the keys.
        let text = serde_json::to_string(&response)
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
        let value = serde_json::to_value(&response)
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
        let mut result = CallToolResult::success(vec![Content::text(text)]);
        result.structured_content = Some(value);
        Ok(result)
    }
}
