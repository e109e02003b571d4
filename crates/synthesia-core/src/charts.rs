//! Chart series and per-agent insight data.

use serde::{Deserialize, Serialize};

use crate::entities::Agent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionTrendPoint {
    pub date: String,
    pub executions: u32,
    pub successful: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformancePoint {
    pub name: String,
    pub executions: u32,
    pub avg_time: f64,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: u32,
}

/// Series plotted on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[serde(default)]
    pub execution_trend: Vec<ExecutionTrendPoint>,
    #[serde(default)]
    pub agent_performance: Vec<AgentPerformancePoint>,
    #[serde(default)]
    pub category_distribution: Vec<CategoryShare>,
}

impl ChartData {
    pub fn category_total(&self) -> u32 {
        self.category_distribution.iter().map(|c| c.value).sum()
    }

    /// Largest execution count in the trend, used to scale sparklines.
    pub fn trend_peak(&self) -> u32 {
        self.execution_trend
            .iter()
            .map(|p| p.executions)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPerformance {
    pub day: String,
    pub executions: u32,
    pub success: u32,
    pub failed: u32,
    pub avg_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSample {
    pub time: String,
    /// Percent
    pub cpu: u32,
    /// MB
    pub memory: u32,
    pub tokens: u32,
}

/// Performance and resource series shown on every agent detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentInsights {
    #[serde(default)]
    pub weekly: Vec<DailyPerformance>,
    #[serde(default)]
    pub resources: Vec<ResourceSample>,
}

/// Runtime parameters displayed in an agent's configuration panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfiguration {
    pub model: String,
    pub provider: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub system_prompt: String,
    pub tools: Vec<&'static str>,
    /// Seconds
    pub timeout: u32,
    pub retry_attempts: u32,
    pub caching_enabled: bool,
}

impl AgentConfiguration {
    pub fn for_agent(agent: &Agent) -> Self {
        Self {
            model: agent
                .llm_model
                .clone()
                .unwrap_or_else(|| "GPT-4".to_string()),
            provider: agent
                .llm_provider
                .clone()
                .unwrap_or_else(|| "OpenAI".to_string()),
            temperature: 0.7,
            max_tokens: 4096,
            top_p: 0.9,
            frequency_penalty: 0.5,
            presence_penalty: 0.5,
            system_prompt: format!(
                "You are a {} agent specialized in {} tasks. Your role is to assist users \
                 with high-quality, accurate, and efficient responses.",
                agent.name,
                agent.category.to_lowercase()
            ),
            tools: vec!["web_search", "code_execution", "file_operations"],
            timeout: 30,
            retry_attempts: 3,
            caching_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AgentStatus;
    use chrono::Utc;

    fn agent(provider: Option<&str>, model: Option<&str>) -> Agent {
        Agent {
            id: "agent-9".into(),
            name: "Summarizer".into(),
            description: "Summarizes documents".into(),
            agent_type: "content_summarizer".into(),
            category: "Content Creation".into(),
            status: AgentStatus::Draft,
            llm_provider: provider.map(String::from),
            llm_model: model.map(String::from),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            execution_count: 0,
            avg_execution_time: 0.0,
            success_rate: 0.0,
        }
    }

    #[test]
    fn test_configuration_falls_back_to_default_model() {
        let config = AgentConfiguration::for_agent(&agent(None, None));
        assert_eq!(config.model, "GPT-4");
        assert_eq!(config.provider, "OpenAI");
    }

    #[test]
    fn test_configuration_prompt_mentions_category() {
        let config = AgentConfiguration::for_agent(&agent(Some("Anthropic"), Some("claude-3")));
        assert_eq!(config.model, "claude-3");
        assert!(config
            .system_prompt
            .starts_with("You are a Summarizer agent specialized in content creation tasks."));
    }

    #[test]
    fn test_chart_totals() {
        let data = ChartData {
            execution_trend: vec![
                ExecutionTrendPoint {
                    date: "Nov 1".into(),
                    executions: 10,
                    successful: 9,
                    failed: 1,
                },
                ExecutionTrendPoint {
                    date: "Nov 2".into(),
                    executions: 30,
                    successful: 30,
                    failed: 0,
                },
            ],
            agent_performance: vec![],
            category_distribution: vec![
                CategoryShare {
                    name: "A".into(),
                    value: 4,
                },
                CategoryShare {
                    name: "B".into(),
                    value: 6,
                },
            ],
        };
        assert_eq!(data.trend_peak(), 30);
        assert_eq!(data.category_total(), 10);
        assert_eq!(ChartData::default().trend_peak(), 0);
    }
}
