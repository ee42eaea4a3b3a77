use crate::types::report::ScoreReport;
use crate::types::scoring::EfficiencySource;

pub fn to_markdown(report: &ScoreReport) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str(&format!(
        "# Score Report: {}\n\n",
        report.name.as_deref().unwrap_or("unnamed vehicle")
    ));
    output.push_str(&format!("Composite score: {}/100\n\n", result.composite));

    output.push_str("## Breakdown\n\n");
    output.push_str(&format!(
        "- efficiency: {}\n- safety: {}\n- value_for_money: {}\n- performance_per_efficiency: {}\n\n",
        result.breakdown.efficiency,
        result.breakdown.safety,
        result.breakdown.value_for_money,
        result.breakdown.performance_per_efficiency
    ));

    output.push_str("## Metrics\n\n");
    output.push_str(&format!(
        "- real_world_efficiency: {} ({})\n",
        optional(result.metrics.real_world_efficiency),
        source_label(result.efficiency_source)
    ));
    output.push_str(&format!(
        "- cost_per_km: {}\n",
        optional(result.metrics.cost_per_km)
    ));
    output.push_str(&format!(
        "- power_to_weight: {}\n",
        optional(result.metrics.power_to_weight)
    ));
    output.push_str(&format!("- design_penalty: {:.2}\n\n", result.penalty));

    output.push_str("## Enrichment\n\n");
    if report.enriched_fields.is_empty() {
        output.push_str("- none\n");
    } else {
        output.push_str(&format!(
            "- filled from enrichment: {}\n",
            report.enriched_fields.join(", ")
        ));
    }

    output
}

fn optional(value: Option<f64>) -> String {
    value
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "n/a".to_string())
}

fn source_label(source: EfficiencySource) -> &'static str {
    match source {
        EfficiencySource::MeasuredMileage => "from claimed mileage",
        EfficiencySource::ElectricRange => "from claimed range",
        EfficiencySource::ModelledBaseline => "modelled from design",
    }
}
