// src/core/country.rs
//
// Free-text shipping country → ISO 3166 alpha-3. Exact (case-insensitive)
// name/alias lookup first, then a loose fuzzy pass.

use crate::config::consts::{OTHER_COUNTRIES, WORLDWIDE};

/// (alpha-3, short name, aliases). Every ISO 3166-1 entry, ordered by code.
static COUNTRIES: &[(&str, &str, &[&str])] = &[
    ("ABW", "Aruba", &[]),
    ("AFG", "Afghanistan", &[]),
    ("AGO", "Angola", &[]),
    ("AIA", "Anguilla", &[]),
    ("ALA", "Åland Islands", &["Aland Islands"]),
    ("ALB", "Albania", &[]),
    ("AND", "Andorra", &[]),
    ("ARE", "United Arab Emirates", &["UAE", "Emirates"]),
    ("ARG", "Argentina", &[]),
    ("ARM", "Armenia", &[]),
    ("ASM", "American Samoa", &[]),
    ("ATA", "Antarctica", &[]),
    ("ATF", "French Southern Territories", &[]),
    ("ATG", "Antigua and Barbuda", &["Antigua"]),
    ("AUS", "Australia", &[]),
    ("AUT", "Austria", &[]),
    ("AZE", "Azerbaijan", &[]),
    ("BDI", "Burundi", &[]),
    ("BEL", "Belgium", &[]),
    ("BEN", "Benin", &[]),
    ("BES", "Bonaire, Sint Eustatius and Saba", &["Caribbean Netherlands", "Bonaire"]),
    ("BFA", "Burkina Faso", &[]),
    ("BGD", "Bangladesh", &[]),
    ("BGR", "Bulgaria", &[]),
    ("BHR", "Bahrain", &[]),
    ("BHS", "Bahamas", &["The Bahamas"]),
    ("BIH", "Bosnia and Herzegovina", &["Bosnia", "Bosnia-Herzegovina"]),
    ("BLM", "Saint Barthélemy", &["Saint Barthelemy", "St Barts"]),
    ("BLR", "Belarus", &[]),
    ("BLZ", "Belize", &[]),
    ("BMU", "Bermuda", &[]),
    ("BOL", "Bolivia", &["Bolivia, Plurinational State of"]),
    ("BRA", "Brazil", &[]),
    ("BRB", "Barbados", &[]),
    ("BRN", "Brunei", &["Brunei Darussalam"]),
    ("BTN", "Bhutan", &[]),
    ("BVT", "Bouvet Island", &[]),
    ("BWA", "Botswana", &[]),
    ("CAF", "Central African Republic", &[]),
    ("CAN", "Canada", &[]),
    ("CCK", "Cocos (Keeling) Islands", &["Cocos Islands"]),
    ("CHE", "Switzerland", &[]),
    ("CHL", "Chile", &[]),
    ("CHN", "China", &[]),
    ("CIV", "Côte d'Ivoire", &["Cote d'Ivoire", "Ivory Coast"]),
    ("CMR", "Cameroon", &[]),
    ("COD", "Democratic Republic of the Congo", &["Congo, Democratic Republic of the", "DR Congo", "DRC", "Congo-Kinshasa"]),
    ("COG", "Republic of the Congo", &["Congo", "Congo-Brazzaville"]),
    ("COK", "Cook Islands", &[]),
    ("COL", "Colombia", &[]),
    ("COM", "Comoros", &[]),
    ("CPV", "Cabo Verde", &["Cape Verde"]),
    ("CRI", "Costa Rica", &[]),
    ("CUB", "Cuba", &[]),
    ("CUW", "Curaçao", &["Curacao"]),
    ("CXR", "Christmas Island", &[]),
    ("CYM", "Cayman Islands", &[]),
    ("CYP", "Cyprus", &[]),
    ("CZE", "Czechia", &["Czech Republic"]),
    ("DEU", "Germany", &[]),
    ("DJI", "Djibouti", &[]),
    ("DMA", "Dominica", &[]),
    ("DNK", "Denmark", &[]),
    ("DOM", "Dominican Republic", &[]),
    ("DZA", "Algeria", &[]),
    ("ECU", "Ecuador", &[]),
    ("EGY", "Egypt", &[]),
    ("ERI", "Eritrea", &[]),
    ("ESH", "Western Sahara", &[]),
    ("ESP", "Spain", &[]),
    ("EST", "Estonia", &[]),
    ("ETH", "Ethiopia", &[]),
    ("FIN", "Finland", &[]),
    ("FJI", "Fiji", &[]),
    ("FLK", "Falkland Islands", &["Falkland Islands (Malvinas)", "Falklands"]),
    ("FRA", "France", &[]),
    ("FRO", "Faroe Islands", &[]),
    ("FSM", "Micronesia", &["Micronesia, Federated States of"]),
    ("GAB", "Gabon", &[]),
    ("GBR", "United Kingdom", &["UK", "Great Britain", "England", "Scotland", "Wales", "Northern Ireland"]),
    ("GEO", "Georgia", &[]),
    ("GGY", "Guernsey", &[]),
    ("GHA", "Ghana", &[]),
    ("GIB", "Gibraltar", &[]),
    ("GIN", "Guinea", &[]),
    ("GLP", "Guadeloupe", &[]),
    ("GMB", "Gambia", &["The Gambia"]),
    ("GNB", "Guinea-Bissau", &[]),
    ("GNQ", "Equatorial Guinea", &[]),
    ("GRC", "Greece", &[]),
    ("GRD", "Grenada", &[]),
    ("GRL", "Greenland", &[]),
    ("GTM", "Guatemala", &[]),
    ("GUF", "French Guiana", &[]),
    ("GUM", "Guam", &[]),
    ("GUY", "Guyana", &[]),
    ("HKG", "Hong Kong", &[]),
    ("HMD", "Heard Island and McDonald Islands", &[]),
    ("HND", "Honduras", &[]),
    ("HRV", "Croatia", &[]),
    ("HTI", "Haiti", &[]),
    ("HUN", "Hungary", &[]),
    ("IDN", "Indonesia", &[]),
    ("IMN", "Isle of Man", &[]),
    ("IND", "India", &[]),
    ("IOT", "British Indian Ocean Territory", &[]),
    ("IRL", "Ireland", &[]),
    ("IRN", "Iran", &["Iran, Islamic Republic of"]),
    ("IRQ", "Iraq", &[]),
    ("ISL", "Iceland", &[]),
    ("ISR", "Israel", &[]),
    ("ITA", "Italy", &[]),
    ("JAM", "Jamaica", &[]),
    ("JEY", "Jersey", &[]),
    ("JOR", "Jordan", &[]),
    ("JPN", "Japan", &[]),
    ("KAZ", "Kazakhstan", &[]),
    ("KEN", "Kenya", &[]),
    ("KGZ", "Kyrgyzstan", &[]),
    ("KHM", "Cambodia", &[]),
    ("KIR", "Kiribati", &[]),
    ("KNA", "Saint Kitts and Nevis", &[]),
    ("KOR", "South Korea", &["Korea, Republic of", "Korea"]),
    ("KWT", "Kuwait", &[]),
    ("LAO", "Laos", &["Lao People's Democratic Republic"]),
    ("LBN", "Lebanon", &[]),
    ("LBR", "Liberia", &[]),
    ("LBY", "Libya", &[]),
    ("LCA", "Saint Lucia", &[]),
    ("LIE", "Liechtenstein", &[]),
    ("LKA", "Sri Lanka", &[]),
    ("LSO", "Lesotho", &[]),
    ("LTU", "Lithuania", &[]),
    ("LUX", "Luxembourg", &[]),
    ("LVA", "Latvia", &[]),
    ("MAC", "Macao", &["Macau"]),
    ("MAF", "Saint Martin (French part)", &["Saint Martin"]),
    ("MAR", "Morocco", &[]),
    ("MCO", "Monaco", &[]),
    ("MDA", "Moldova", &["Moldova, Republic of"]),
    ("MDG", "Madagascar", &[]),
    ("MDV", "Maldives", &[]),
    ("MEX", "Mexico", &[]),
    ("MHL", "Marshall Islands", &[]),
    ("MKD", "North Macedonia", &["Macedonia"]),
    ("MLI", "Mali", &[]),
    ("MLT", "Malta", &[]),
    ("MMR", "Myanmar", &["Burma"]),
    ("MNE", "Montenegro", &[]),
    ("MNG", "Mongolia", &[]),
    ("MNP", "Northern Mariana Islands", &[]),
    ("MOZ", "Mozambique", &[]),
    ("MRT", "Mauritania", &[]),
    ("MSR", "Montserrat", &[]),
    ("MTQ", "Martinique", &[]),
    ("MUS", "Mauritius", &[]),
    ("MWI", "Malawi", &[]),
    ("MYS", "Malaysia", &[]),
    ("MYT", "Mayotte", &[]),
    ("NAM", "Namibia", &[]),
    ("NCL", "New Caledonia", &[]),
    ("NER", "Niger", &[]),
    ("NFK", "Norfolk Island", &[]),
    ("NGA", "Nigeria", &[]),
    ("NIC", "Nicaragua", &[]),
    ("NIU", "Niue", &[]),
    ("NLD", "Netherlands", &["The Netherlands", "Holland"]),
    ("NOR", "Norway", &[]),
    ("NPL", "Nepal", &[]),
    ("NRU", "Nauru", &[]),
    ("NZL", "New Zealand", &[]),
    ("OMN", "Oman", &[]),
    ("PAK", "Pakistan", &[]),
    ("PAN", "Panama", &[]),
    ("PCN", "Pitcairn", &["Pitcairn Islands"]),
    ("PER", "Peru", &[]),
    ("PHL", "Philippines", &[]),
    ("PLW", "Palau", &[]),
    ("PNG", "Papua New Guinea", &[]),
    ("POL", "Poland", &[]),
    ("PRI", "Puerto Rico", &[]),
    ("PRK", "North Korea", &["Korea, Democratic People's Republic of"]),
    ("PRT", "Portugal", &[]),
    ("PRY", "Paraguay", &[]),
    ("PSE", "Palestine", &["Palestine, State of"]),
    ("PYF", "French Polynesia", &[]),
    ("QAT", "Qatar", &[]),
    ("REU", "Réunion", &["Reunion"]),
    ("ROU", "Romania", &[]),
    ("RUS", "Russia", &["Russian Federation"]),
    ("RWA", "Rwanda", &[]),
    ("SAU", "Saudi Arabia", &[]),
    ("SDN", "Sudan", &[]),
    ("SEN", "Senegal", &[]),
    ("SGP", "Singapore", &[]),
    ("SGS", "South Georgia and the South Sandwich Islands", &[]),
    ("SHN", "Saint Helena, Ascension and Tristan da Cunha", &["Saint Helena"]),
    ("SJM", "Svalbard and Jan Mayen", &[]),
    ("SLB", "Solomon Islands", &[]),
    ("SLE", "Sierra Leone", &[]),
    ("SLV", "El Salvador", &[]),
    ("SMR", "San Marino", &[]),
    ("SOM", "Somalia", &[]),
    ("SPM", "Saint Pierre and Miquelon", &[]),
    ("SRB", "Serbia", &[]),
    ("SSD", "South Sudan", &[]),
    ("STP", "Sao Tome and Principe", &["São Tomé and Príncipe"]),
    ("SUR", "Suriname", &[]),
    ("SVK", "Slovakia", &[]),
    ("SVN", "Slovenia", &[]),
    ("SWE", "Sweden", &[]),
    ("SWZ", "Eswatini", &["Swaziland"]),
    ("SXM", "Sint Maarten (Dutch part)", &["Sint Maarten"]),
    ("SYC", "Seychelles", &[]),
    ("SYR", "Syria", &["Syrian Arab Republic"]),
    ("TCA", "Turks and Caicos Islands", &[]),
    ("TCD", "Chad", &[]),
    ("TGO", "Togo", &[]),
    ("THA", "Thailand", &[]),
    ("TJK", "Tajikistan", &[]),
    ("TKL", "Tokelau", &[]),
    ("TKM", "Turkmenistan", &[]),
    ("TLS", "Timor-Leste", &["East Timor"]),
    ("TON", "Tonga", &[]),
    ("TTO", "Trinidad and Tobago", &[]),
    ("TUN", "Tunisia", &[]),
    ("TUR", "Turkey", &["Türkiye"]),
    ("TUV", "Tuvalu", &[]),
    ("TWN", "Taiwan", &[]),
    ("TZA", "Tanzania", &["Tanzania, United Republic of"]),
    ("UGA", "Uganda", &[]),
    ("UKR", "Ukraine", &[]),
    ("UMI", "United States Minor Outlying Islands", &[]),
    ("URY", "Uruguay", &[]),
    ("USA", "United States", &["USA", "US", "United States of America"]),
    ("UZB", "Uzbekistan", &[]),
    ("VAT", "Holy See", &["Vatican", "Vatican City"]),
    ("VCT", "Saint Vincent and the Grenadines", &[]),
    ("VEN", "Venezuela", &["Venezuela, Bolivarian Republic of"]),
    ("VGB", "British Virgin Islands", &["Virgin Islands, British"]),
    ("VIR", "United States Virgin Islands", &["Virgin Islands, U.S.", "US Virgin Islands"]),
    ("VNM", "Vietnam", &["Viet Nam"]),
    ("VUT", "Vanuatu", &[]),
    ("WLF", "Wallis and Futuna", &[]),
    ("WSM", "Samoa", &[]),
    ("YEM", "Yemen", &[]),
    ("ZAF", "South Africa", &[]),
    ("ZMB", "Zambia", &[]),
    ("ZWE", "Zimbabwe", &[]),
];

fn key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = true;
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            prev_space = false;
        } else if !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    out.trim_end().to_string()
}

/// ISO alpha-3 for a free-text country name. `None` for "Worldwide", the
/// "Other countries" bucket, blanks, and anything unrecognized.
pub fn alpha3(name: &str) -> Option<&'static str> {
    let k = key(name);
    if k.is_empty() || k == key(WORLDWIDE) || k == key(OTHER_COUNTRIES) {
        return None;
    }

    // Exact
    for (code, official, aliases) in COUNTRIES {
        if key(official) == k || aliases.iter().any(|a| key(a) == k) || code.eq_ignore_ascii_case(&k) {
            return Some(*code);
        }
    }

    fuzzy(&k)
}

/// Loose match, in tiers. A table name starting with the query beats one
/// whose words cover every query word, which beats a table name found as
/// whole words inside the query. Within a tier the smallest length
/// difference wins. Bare substrings never match ("Niger" is not "Nigeria"),
/// and short queries are not guessed.
fn fuzzy(k: &str) -> Option<&'static str> {
    if k.len() < 4 {
        return None;
    }
    let padded = format!(" {k} ");
    let mut best: Option<(&'static str, u8, usize)> = None;
    for (code, official, aliases) in COUNTRIES {
        for cand in std::iter::once(official).chain(aliases.iter()) {
            let c = key(cand);
            if c.len() < 4 {
                continue;
            }
            let tier = if c.starts_with(k) {
                0
            } else if words_covered(k, &c) {
                1
            } else if padded.contains(&format!(" {c} ")) {
                2
            } else {
                continue;
            };
            let diff = c.len().abs_diff(k.len());
            if best.is_none_or(|(_, t, d)| (tier, diff) < (t, d)) {
                best = Some((*code, tier, diff));
            }
        }
    }
    if let Some((code, tier, _)) = best {
        logd!("Country: fuzzy `{k}` → {code} (tier {tier})");
    }
    best.map(|(code, _, _)| code)
}

fn words_covered(query: &str, cand: &str) -> bool {
    let words: Vec<&str> = query.split(' ').filter(|w| w.len() >= 3).collect();
    !words.is_empty() && words.iter().all(|w| cand.split(' ').any(|c| c == *w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_and_aliases() {
        assert_eq!(alpha3("Netherlands"), Some("NLD"));
        assert_eq!(alpha3("  united kingdom "), Some("GBR"));
        assert_eq!(alpha3("Czech Republic"), Some("CZE"));
        assert_eq!(alpha3("USA"), Some("USA"));
        assert_eq!(alpha3("deu"), Some("DEU"));
    }

    #[test]
    fn fuzzy_fallback() {
        assert_eq!(alpha3("Germany (EU)"), Some("DEU"));
        assert_eq!(alpha3("Turks & Caicos"), Some("TCA"));
        assert_eq!(alpha3("Nethe"), Some("NLD"));
        assert_eq!(alpha3("Bosnia & Herzegovina"), Some("BIH"));
    }

    #[test]
    fn whole_names_beat_substrings() {
        assert_eq!(alpha3("Niger"), Some("NER"));
        assert_eq!(alpha3("Nigeria"), Some("NGA"));
        assert_eq!(alpha3("Niger (West Africa)"), Some("NER"));
        assert_eq!(alpha3("Nigeria, Lagos"), Some("NGA"));
        assert_eq!(alpha3("Equatorial Guinea only"), Some("GNQ"));
        assert_eq!(alpha3("Dominica"), Some("DMA"));
    }

    #[test]
    fn less_common_countries_resolve() {
        assert_eq!(alpha3("Albania"), Some("ALB"));
        assert_eq!(alpha3("Belarus"), Some("BLR"));
        assert_eq!(alpha3("Georgia"), Some("GEO"));
        assert_eq!(alpha3("Moldova"), Some("MDA"));
        assert_eq!(alpha3("Lebanon"), Some("LBN"));
        assert_eq!(alpha3("Bosnia and Herzegovina"), Some("BIH"));
        assert_eq!(alpha3("Ivory Coast"), Some("CIV"));
        assert_eq!(alpha3("Åland Islands"), Some("ALA"));
        assert_eq!(alpha3("zwe"), Some("ZWE"));
    }

    #[test]
    fn non_countries() {
        assert_eq!(alpha3("Worldwide"), None);
        assert_eq!(alpha3("Other countries"), None);
        assert_eq!(alpha3(""), None);
        assert_eq!(alpha3("Xyzzyland"), None);
        assert_eq!(alpha3("EU"), None);
        assert_eq!(alpha3("Atlantis"), None);
        assert_eq!(alpha3("South America"), None);
    }
}
