//! ISO 3166-1 country table used to turn the detected locale into the
//! two-letter code expected by the holiday API.

/// A country known to the holiday lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub iso3: &'static str,
    pub iso2: &'static str,
    /// English display name, used in the year view holiday header.
    pub name: &'static str,
}

const fn c(iso3: &'static str, iso2: &'static str, name: &'static str) -> Country {
    Country { iso3, iso2, name }
}

/// Every country in ISO 3166-1, sorted by ISO3 code.
pub static COUNTRIES: &[Country] = &[
    c("ABW", "AW", "Aruba"),
    c("AFG", "AF", "Afghanistan"),
    c("AGO", "AO", "Angola"),
    c("AIA", "AI", "Anguilla"),
    c("ALA", "AX", "Åland Islands"),
    c("ALB", "AL", "Albania"),
    c("AND", "AD", "Andorra"),
    c("ARE", "AE", "United Arab Emirates"),
    c("ARG", "AR", "Argentina"),
    c("ARM", "AM", "Armenia"),
    c("ASM", "AS", "American Samoa"),
    c("ATA", "AQ", "Antarctica"),
    c("ATF", "TF", "French Southern Territories"),
    c("ATG", "AG", "Antigua & Barbuda"),
    c("AUS", "AU", "Australia"),
    c("AUT", "AT", "Austria"),
    c("AZE", "AZ", "Azerbaijan"),
    c("BDI", "BI", "Burundi"),
    c("BEL", "BE", "Belgium"),
    c("BEN", "BJ", "Benin"),
    c("BES", "BQ", "Caribbean Netherlands"),
    c("BFA", "BF", "Burkina Faso"),
    c("BGD", "BD", "Bangladesh"),
    c("BGR", "BG", "Bulgaria"),
    c("BHR", "BH", "Bahrain"),
    c("BHS", "BS", "Bahamas"),
    c("BIH", "BA", "Bosnia & Herzegovina"),
    c("BLM", "BL", "St. Barthélemy"),
    c("BLR", "BY", "Belarus"),
    c("BLZ", "BZ", "Belize"),
    c("BMU", "BM", "Bermuda"),
    c("BOL", "BO", "Bolivia"),
    c("BRA", "BR", "Brazil"),
    c("BRB", "BB", "Barbados"),
    c("BRN", "BN", "Brunei"),
    c("BTN", "BT", "Bhutan"),
    c("BVT", "BV", "Bouvet Island"),
    c("BWA", "BW", "Botswana"),
    c("CAF", "CF", "Central African Republic"),
    c("CAN", "CA", "Canada"),
    c("CCK", "CC", "Cocos (Keeling) Islands"),
    c("CHE", "CH", "Switzerland"),
    c("CHL", "CL", "Chile"),
    c("CHN", "CN", "China"),
    c("CIV", "CI", "Côte d’Ivoire"),
    c("CMR", "CM", "Cameroon"),
    c("COD", "CD", "Congo - Kinshasa"),
    c("COG", "CG", "Congo - Brazzaville"),
    c("COK", "CK", "Cook Islands"),
    c("COL", "CO", "Colombia"),
    c("COM", "KM", "Comoros"),
    c("CPV", "CV", "Cape Verde"),
    c("CRI", "CR", "Costa Rica"),
    c("CUB", "CU", "Cuba"),
    c("CUW", "CW", "Curaçao"),
    c("CXR", "CX", "Christmas Island"),
    c("CYM", "KY", "Cayman Islands"),
    c("CYP", "CY", "Cyprus"),
    c("CZE", "CZ", "Czechia"),
    c("DEU", "DE", "Germany"),
    c("DJI", "DJ", "Djibouti"),
    c("DMA", "DM", "Dominica"),
    c("DNK", "DK", "Denmark"),
    c("DOM", "DO", "Dominican Republic"),
    c("DZA", "DZ", "Algeria"),
    c("ECU", "EC", "Ecuador"),
    c("EGY", "EG", "Egypt"),
    c("ERI", "ER", "Eritrea"),
    c("ESH", "EH", "Western Sahara"),
    c("ESP", "ES", "Spain"),
    c("EST", "EE", "Estonia"),
    c("ETH", "ET", "Ethiopia"),
    c("FIN", "FI", "Finland"),
    c("FJI", "FJ", "Fiji"),
    c("FLK", "FK", "Falkland Islands"),
    c("FRA", "FR", "France"),
    c("FRO", "FO", "Faroe Islands"),
    c("FSM", "FM", "Micronesia"),
    c("GAB", "GA", "Gabon"),
    c("GBR", "GB", "United Kingdom"),
    c("GEO", "GE", "Georgia"),
    c("GGY", "GG", "Guernsey"),
    c("GHA", "GH", "Ghana"),
    c("GIB", "GI", "Gibraltar"),
    c("GIN", "GN", "Guinea"),
    c("GLP", "GP", "Guadeloupe"),
    c("GMB", "GM", "Gambia"),
    c("GNB", "GW", "Guinea-Bissau"),
    c("GNQ", "GQ", "Equatorial Guinea"),
    c("GRC", "GR", "Greece"),
    c("GRD", "GD", "Grenada"),
    c("GRL", "GL", "Greenland"),
    c("GTM", "GT", "Guatemala"),
    c("GUF", "GF", "French Guiana"),
    c("GUM", "GU", "Guam"),
    c("GUY", "GY", "Guyana"),
    c("HKG", "HK", "Hong Kong SAR China"),
    c("HMD", "HM", "Heard & McDonald Islands"),
    c("HND", "HN", "Honduras"),
    c("HRV", "HR", "Croatia"),
    c("HTI", "HT", "Haiti"),
    c("HUN", "HU", "Hungary"),
    c("IDN", "ID", "Indonesia"),
    c("IMN", "IM", "Isle of Man"),
    c("IND", "IN", "India"),
    c("IOT", "IO", "British Indian Ocean Territory"),
    c("IRL", "IE", "Ireland"),
    c("IRN", "IR", "Iran"),
    c("IRQ", "IQ", "Iraq"),
    c("ISL", "IS", "Iceland"),
    c("ISR", "IL", "Israel"),
    c("ITA", "IT", "Italy"),
    c("JAM", "JM", "Jamaica"),
    c("JEY", "JE", "Jersey"),
    c("JOR", "JO", "Jordan"),
    c("JPN", "JP", "Japan"),
    c("KAZ", "KZ", "Kazakhstan"),
    c("KEN", "KE", "Kenya"),
    c("KGZ", "KG", "Kyrgyzstan"),
    c("KHM", "KH", "Cambodia"),
    c("KIR", "KI", "Kiribati"),
    c("KNA", "KN", "St. Kitts & Nevis"),
    c("KOR", "KR", "South Korea"),
    c("KWT", "KW", "Kuwait"),
    c("LAO", "LA", "Laos"),
    c("LBN", "LB", "Lebanon"),
    c("LBR", "LR", "Liberia"),
    c("LBY", "LY", "Libya"),
    c("LCA", "LC", "St. Lucia"),
    c("LIE", "LI", "Liechtenstein"),
    c("LKA", "LK", "Sri Lanka"),
    c("LSO", "LS", "Lesotho"),
    c("LTU", "LT", "Lithuania"),
    c("LUX", "LU", "Luxembourg"),
    c("LVA", "LV", "Latvia"),
    c("MAC", "MO", "Macao SAR China"),
    c("MAF", "MF", "St. Martin"),
    c("MAR", "MA", "Morocco"),
    c("MCO", "MC", "Monaco"),
    c("MDA", "MD", "Moldova"),
    c("MDG", "MG", "Madagascar"),
    c("MDV", "MV", "Maldives"),
    c("MEX", "MX", "Mexico"),
    c("MHL", "MH", "Marshall Islands"),
    c("MKD", "MK", "North Macedonia"),
    c("MLI", "ML", "Mali"),
    c("MLT", "MT", "Malta"),
    c("MMR", "MM", "Myanmar (Burma)"),
    c("MNE", "ME", "Montenegro"),
    c("MNG", "MN", "Mongolia"),
    c("MNP", "MP", "Northern Mariana Islands"),
    c("MOZ", "MZ", "Mozambique"),
    c("MRT", "MR", "Mauritania"),
    c("MSR", "MS", "Montserrat"),
    c("MTQ", "MQ", "Martinique"),
    c("MUS", "MU", "Mauritius"),
    c("MWI", "MW", "Malawi"),
    c("MYS", "MY", "Malaysia"),
    c("MYT", "YT", "Mayotte"),
    c("NAM", "NA", "Namibia"),
    c("NCL", "NC", "New Caledonia"),
    c("NER", "NE", "Niger"),
    c("NFK", "NF", "Norfolk Island"),
    c("NGA", "NG", "Nigeria"),
    c("NIC", "NI", "Nicaragua"),
    c("NIU", "NU", "Niue"),
    c("NLD", "NL", "Netherlands"),
    c("NOR", "NO", "Norway"),
    c("NPL", "NP", "Nepal"),
    c("NRU", "NR", "Nauru"),
    c("NZL", "NZ", "New Zealand"),
    c("OMN", "OM", "Oman"),
    c("PAK", "PK", "Pakistan"),
    c("PAN", "PA", "Panama"),
    c("PCN", "PN", "Pitcairn Islands"),
    c("PER", "PE", "Peru"),
    c("PHL", "PH", "Philippines"),
    c("PLW", "PW", "Palau"),
    c("PNG", "PG", "Papua New Guinea"),
    c("POL", "PL", "Poland"),
    c("PRI", "PR", "Puerto Rico"),
    c("PRK", "KP", "North Korea"),
    c("PRT", "PT", "Portugal"),
    c("PRY", "PY", "Paraguay"),
    c("PSE", "PS", "Palestinian Territories"),
    c("PYF", "PF", "French Polynesia"),
    c("QAT", "QA", "Qatar"),
    c("REU", "RE", "Réunion"),
    c("ROU", "RO", "Romania"),
    c("RUS", "RU", "Russia"),
    c("RWA", "RW", "Rwanda"),
    c("SAU", "SA", "Saudi Arabia"),
    c("SDN", "SD", "Sudan"),
    c("SEN", "SN", "Senegal"),
    c("SGP", "SG", "Singapore"),
    c("SGS", "GS", "South Georgia & South Sandwich Islands"),
    c("SHN", "SH", "St. Helena"),
    c("SJM", "SJ", "Svalbard & Jan Mayen"),
    c("SLB", "SB", "Solomon Islands"),
    c("SLE", "SL", "Sierra Leone"),
    c("SLV", "SV", "El Salvador"),
    c("SMR", "SM", "San Marino"),
    c("SOM", "SO", "Somalia"),
    c("SPM", "PM", "St. Pierre & Miquelon"),
    c("SRB", "RS", "Serbia"),
    c("SSD", "SS", "South Sudan"),
    c("STP", "ST", "São Tomé & Príncipe"),
    c("SUR", "SR", "Suriname"),
    c("SVK", "SK", "Slovakia"),
    c("SVN", "SI", "Slovenia"),
    c("SWE", "SE", "Sweden"),
    c("SWZ", "SZ", "Eswatini"),
    c("SXM", "SX", "Sint Maarten"),
    c("SYC", "SC", "Seychelles"),
    c("SYR", "SY", "Syria"),
    c("TCA", "TC", "Turks & Caicos Islands"),
    c("TCD", "TD", "Chad"),
    c("TGO", "TG", "Togo"),
    c("THA", "TH", "Thailand"),
    c("TJK", "TJ", "Tajikistan"),
    c("TKL", "TK", "Tokelau"),
    c("TKM", "TM", "Turkmenistan"),
    c("TLS", "TL", "Timor-Leste"),
    c("TON", "TO", "Tonga"),
    c("TTO", "TT", "Trinidad & Tobago"),
    c("TUN", "TN", "Tunisia"),
    c("TUR", "TR", "Turkey"),
    c("TUV", "TV", "Tuvalu"),
    c("TWN", "TW", "Taiwan"),
    c("TZA", "TZ", "Tanzania"),
    c("UGA", "UG", "Uganda"),
    c("UKR", "UA", "Ukraine"),
    c("UMI", "UM", "U.S. Outlying Islands"),
    c("URY", "UY", "Uruguay"),
    c("USA", "US", "United States"),
    c("UZB", "UZ", "Uzbekistan"),
    c("VAT", "VA", "Vatican City"),
    c("VCT", "VC", "St. Vincent & Grenadines"),
    c("VEN", "VE", "Venezuela"),
    c("VGB", "VG", "British Virgin Islands"),
    c("VIR", "VI", "U.S. Virgin Islands"),
    c("VNM", "VN", "Vietnam"),
    c("VUT", "VU", "Vanuatu"),
    c("WLF", "WF", "Wallis & Futuna"),
    c("WSM", "WS", "Samoa"),
    c("YEM", "YE", "Yemen"),
    c("ZAF", "ZA", "South Africa"),
    c("ZMB", "ZM", "Zambia"),
    c("ZWE", "ZW", "Zimbabwe"),
];

/// Look up a country by its three-letter code (case-insensitive).
pub fn by_iso3(code: &str) -> Option<Country> {
    let code = code.to_ascii_uppercase();
    COUNTRIES
        .binary_search_by(|country| country.iso3.cmp(code.as_str()))
        .ok()
        .map(|idx| COUNTRIES[idx])
}

/// Look up a country by its two-letter code (case-insensitive).
pub fn by_iso2(code: &str) -> Option<Country> {
    COUNTRIES
        .iter()
        .find(|country| country.iso2.eq_ignore_ascii_case(code))
        .copied()
}

/// Look up a country by either a two- or three-letter code.
pub fn lookup(code: &str) -> Option<Country> {
    match code.len() {
        2 => by_iso2(code),
        3 => by_iso3(code),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_iso3() {
        assert!(COUNTRIES.windows(2).all(|w| w[0].iso3 < w[1].iso3));
    }

    #[test]
    fn iso3_to_iso2() {
        assert_eq!(by_iso3("USA").map(|c| c.iso2), Some("US"));
        assert_eq!(by_iso3("deu").map(|c| c.iso2), Some("DE"));
        assert_eq!(by_iso3("MYT").map(|c| c.iso2), Some("YT"));
        assert_eq!(by_iso3("XXX"), None);
    }

    #[test]
    fn iso2_lookup_is_case_insensitive() {
        let mexico = by_iso2("mx").unwrap();
        assert_eq!(mexico.iso3, "MEX");
        assert_eq!(mexico.name, "Mexico");
    }

    #[test]
    fn lookup_dispatches_on_length() {
        assert_eq!(lookup("CA").map(|c| c.iso3), Some("CAN"));
        assert_eq!(lookup("CAN").map(|c| c.iso2), Some("CA"));
        assert_eq!(lookup("C"), None);
        assert_eq!(lookup("CANADA"), None);
    }
}
