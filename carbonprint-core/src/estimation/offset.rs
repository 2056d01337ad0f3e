use super::engine::KG_PER_TONNE;

/// Average kg CO2 absorbed by one mature tree per year.
pub const KG_CO2_PER_TREE_PER_YEAR: f64 = 21.0;

/// Trees needed to absorb `total_tonnes` of CO2 in a year, truncated toward zero.
pub fn trees_needed(total_tonnes: f64) -> u64 {
    trees_for_kg(total_tonnes * KG_PER_TONNE)
}

/// Trees needed for a total given in kg.
pub fn trees_for_kg(total_kg: f64) -> u64 {
    let trees = (total_kg / KG_CO2_PER_TREE_PER_YEAR).floor();
    if trees.is_nan() || trees <= 0.0 {
        0
    } else {
        trees as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tonne_needs_47_trees() {
        assert_eq!(trees_needed(1.0), 47);
    }

    #[test]
    fn nothing_to_offset() {
        assert_eq!(trees_needed(0.0), 0);
        assert_eq!(trees_needed(-3.0), 0);
        assert_eq!(trees_needed(f64::NAN), 0);
    }

    #[test]
    fn exact_multiples_are_not_rounded_down() {
        assert_eq!(trees_needed(0.021), 1);
        assert_eq!(trees_needed(0.42), 20);
        assert_eq!(trees_needed(6.883), 327);
    }

    #[test]
    fn kg_totals_divide_without_detour() {
        // 1825 + 420 + 312 + 26 kg; 2583 / 1000 * 1000 is not exactly 2583
        let total_kg = 1825.0 + 420.0 + 312.0 + 5.0 * 52.0 * 0.1;
        assert_eq!(trees_for_kg(total_kg), 123);
        assert_eq!(trees_for_kg(20.999), 0);
        assert_eq!(trees_for_kg(-1.0), 0);
    }
}
