string_enum! {
    /// Display format of a number property.
    pub enum FormatType {
        Number => "number",
        NumberWithCommas => "number_with_commas",
        Percent => "percent",
        Dollar => "dollar",
        CanadianDollar => "canadian_dollar",
        Euro => "euro",
        Pound => "pound",
        Yen => "yen",
        Ruble => "ruble",
        Rupee => "rupee",
        Won => "won",
        Yuan => "yuan",
        Real => "real",
        Lira => "lira",
        Rupiah => "rupiah",
        Franc => "franc",
        HongKongDollar => "hong_kong_dollar",
        NewZealandDollar => "new_zealand_dollar",
        Krona => "krona",
        NorwegianKrone => "norwegian_krone",
        MexicanPeso => "mexican_peso",
        Rand => "rand",
        NewTaiwanDollar => "new_taiwan_dollar",
        DanishKrone => "danish_krone",
        Zloty => "zloty",
        Baht => "baht",
        Forint => "forint",
        Koruna => "koruna",
        Shekel => "shekel",
        ChileanPeso => "chilean_peso",
        PhilippinePeso => "philippine_peso",
        Dirham => "dirham",
        ColombianPeso => "colombian_peso",
        Riyal => "riyal",
        Ringgit => "ringgit",
        Leu => "leu",
        ArgentinePeso => "argentine_peso",
        UruguayanPeso => "uruguayan_peso",
        SingaporeDollar => "singapore_dollar",
    }
}

impl Default for FormatType {
    fn default() -> Self {
        FormatType::Number
    }
}

string_enum! {
    /// Aggregation a rollup property applies across its relation.
    pub enum FunctionType {
        CountAll => "count_all",
        CountValues => "count_values",
        CountUniqueValues => "count_unique_values",
        CountEmpty => "count_empty",
        CountNotEmpty => "count_not_empty",
        PercentEmpty => "percent_empty",
        PercentNotEmpty => "percent_not_empty",
        Sum => "sum",
        Average => "average",
        Median => "median",
        Min => "min",
        Max => "max",
        Range => "range",
        ShowOriginal => "show_original",
    }
}

impl Default for FunctionType {
    fn default() -> Self {
        FunctionType::ShowOriginal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_type_escape_hatch() {
        let format: FormatType = serde_json::from_str("\"percent\"").unwrap();
        assert_eq!(format, FormatType::Percent);

        let format: FormatType = serde_json::from_str("\"bitcoin\"").unwrap();
        assert_eq!(format, FormatType::Other("bitcoin".to_string()));
        assert_eq!(serde_json::to_string(&format).unwrap(), "\"bitcoin\"");
    }

    #[test]
    fn test_function_type_escape_hatch() {
        assert_eq!(FunctionType::from("sum"), FunctionType::Sum);
        let function = FunctionType::from("checked");
        assert!(!function.is_known());
        assert_eq!(function.to_string(), "checked");
    }
}
