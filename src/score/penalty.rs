use crate::types::record::{positive, BodyType, SpecificationRecord, TransmissionType};
use tracing::trace;

/// Unitless design penalty derived from structural parameters. Bonuses from
/// small engines, light bodies or tall gearing offset other factors but the
/// total never drops below zero.
pub fn efficiency_penalty(record: &SpecificationRecord) -> f64 {
    let factors = [
        ("displacement", displacement_factor(record.displacement)),
        ("kerb_weight", kerb_weight_factor(record.kerb_weight)),
        ("cylinders", cylinder_factor(record.cylinders)),
        ("body_type", body_type_factor(record.body_type.as_deref())),
        (
            "transmission",
            transmission_factor(record.transmission_type.as_deref()),
        ),
        (
            "power_to_weight",
            power_to_weight_factor(record.power, record.kerb_weight),
        ),
        (
            "ground_clearance",
            ground_clearance_factor(record.ground_clearance),
        ),
        ("gears", gears_factor(record.gears)),
    ];

    let mut penalty = 0.0;
    for (factor, value) in factors {
        if value != 0.0 {
            trace!(factor, value, "penalty factor");
        }
        penalty += value;
    }
    penalty.max(0.0)
}

fn displacement_factor(displacement: Option<f64>) -> f64 {
    match positive(displacement) {
        Some(cc) if cc > 1500.0 => ((cc - 1500.0) / 100.0 * 2.5).min(25.0),
        Some(cc) if cc >= 1200.0 => (cc - 1200.0) / 100.0 * 1.5,
        Some(cc) if cc < 1000.0 => -((1000.0 - cc) / 100.0 * 2.0).min(10.0),
        _ => 0.0,
    }
}

fn kerb_weight_factor(kerb_weight: Option<f64>) -> f64 {
    match positive(kerb_weight) {
        Some(kg) if kg > 1200.0 => ((kg - 1200.0) / 100.0 * 4.0).min(30.0),
        Some(kg) if kg >= 1000.0 => (kg - 1000.0) / 100.0 * 2.0,
        Some(kg) if kg < 900.0 => -((900.0 - kg) / 100.0 * 3.0).min(12.0),
        _ => 0.0,
    }
}

fn cylinder_factor(cylinders: Option<f64>) -> f64 {
    match cylinders {
        Some(count) if count > 4.0 => (count - 4.0) * 3.0,
        _ => 0.0,
    }
}

fn body_type_factor(body_type: Option<&str>) -> f64 {
    let Some(raw) = body_type else {
        return body_type_value(BodyType::Sedan);
    };
    BodyType::parse(raw).map(body_type_value).unwrap_or(7.0)
}

fn body_type_value(body_type: BodyType) -> f64 {
    match body_type {
        BodyType::Hatchback => 2.0,
        BodyType::Sedan => 5.0,
        BodyType::Coupe => 7.0,
        BodyType::Crossover => 10.0,
        BodyType::Convertible => 12.0,
        BodyType::Mpv => 15.0,
        BodyType::Suv => 20.0,
    }
}

fn transmission_factor(transmission: Option<&str>) -> f64 {
    let Some(raw) = transmission else {
        return transmission_value(TransmissionType::Manual);
    };
    TransmissionType::parse(raw)
        .map(transmission_value)
        .unwrap_or(2.0)
}

fn transmission_value(transmission: TransmissionType) -> f64 {
    match transmission {
        TransmissionType::Manual => 0.0,
        TransmissionType::Cvt => -1.0,
        TransmissionType::Amt => 2.0,
        TransmissionType::Dct => 3.0,
        TransmissionType::Automatic => 5.0,
        TransmissionType::Hybrid => -3.0,
    }
}

// The 0.746 factor is applied to the stored power figure as-is.
fn power_to_weight_factor(power: Option<f64>, kerb_weight: Option<f64>) -> f64 {
    let (Some(power), Some(kerb_weight)) = (positive(power), positive(kerb_weight)) else {
        return 0.0;
    };
    let kw_per_tonne = power * 0.746 / (kerb_weight / 1000.0);
    if kw_per_tonne > 80.0 {
        ((kw_per_tonne - 80.0) / 10.0 * 2.0).min(12.0)
    } else {
        0.0
    }
}

fn ground_clearance_factor(clearance: Option<f64>) -> f64 {
    match clearance {
        Some(mm) if mm > 180.0 => ((mm - 180.0) / 10.0).min(8.0),
        _ => 0.0,
    }
}

fn gears_factor(gears: Option<f64>) -> f64 {
    match gears {
        Some(count) if count >= 6.0 => -(count - 5.0).min(3.0),
        _ => 0.0,
    }
}
