//! Static reference tables: session years, UN regional groups, and
//! organization membership records.
//!
//! All tables are read-only associative containers built once at startup
//! and shared by reference across the whole run. Lookups are exact string
//! matches on the country name as it appears in the transcript; no fuzzy
//! matching or accent normalization happens on this path, which is why
//! several countries appear under more than one official spelling.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::{FIRST_SESSION, LAST_SESSION, SESSION_EPOCH_YEAR};
use crate::types::Membership;

/// Region returned for countries absent from the region table.
pub const UNKNOWN_REGION: &str = "Unknown";

/// General Assembly sessions start in September: session 48 = 1993,
/// session 79 = 2024.
static SESSION_YEAR_MAP: LazyLock<HashMap<String, i32>> = LazyLock::new(|| {
    (FIRST_SESSION..=LAST_SESSION)
        .map(|s| (format!("session_{s}"), SESSION_EPOCH_YEAR + s as i32))
        .collect()
});

/// Calendar year for a session identifier (e.g. "session_48" -> 1993).
///
/// Returns `None` for identifiers outside the known session range.
#[must_use]
pub fn session_year(session: &str) -> Option<i32> {
    SESSION_YEAR_MAP.get(session).copied()
}

/// UN regional groups, keyed by country name.
static REGION_TABLE: &[(&str, &str)] = &[
    // African Group
    ("Algeria", "Africa"), ("Angola", "Africa"), ("Benin", "Africa"), ("Botswana", "Africa"),
    ("Burkina Faso", "Africa"), ("Burundi", "Africa"), ("Cabo Verde", "Africa"), ("Cape Verde", "Africa"),
    ("Cameroon", "Africa"), ("Central African Republic", "Africa"), ("Chad", "Africa"), ("Comoros", "Africa"),
    ("Congo", "Africa"), ("Côte d'Ivoire", "Africa"), ("Democratic Republic of the Congo", "Africa"),
    ("Djibouti", "Africa"), ("Egypt", "Africa"), ("Equatorial Guinea", "Africa"), ("Eritrea", "Africa"),
    ("Eswatini", "Africa"), ("Swaziland", "Africa"), ("Ethiopia", "Africa"), ("Gabon", "Africa"),
    ("Gambia", "Africa"), ("Ghana", "Africa"), ("Guinea", "Africa"), ("Guinea-Bissau", "Africa"),
    ("Kenya", "Africa"), ("Lesotho", "Africa"), ("Liberia", "Africa"), ("Libya", "Africa"),
    ("Madagascar", "Africa"), ("Malawi", "Africa"), ("Mali", "Africa"), ("Mauritania", "Africa"),
    ("Mauritius", "Africa"), ("Morocco", "Africa"), ("Mozambique", "Africa"), ("Namibia", "Africa"),
    ("Niger", "Africa"), ("Nigeria", "Africa"), ("Rwanda", "Africa"), ("Sao Tome and Principe", "Africa"),
    ("Sao Tomé and Principe", "Africa"), ("Senegal", "Africa"), ("Seychelles", "Africa"),
    ("Sierra Leone", "Africa"), ("Somalia", "Africa"), ("South Africa", "Africa"), ("South Sudan", "Africa"),
    ("Sudan", "Africa"), ("Togo", "Africa"), ("Tunisia", "Africa"), ("Uganda", "Africa"),
    ("United Republic of Tanzania", "Africa"), ("Tanzania", "Africa"), ("Zambia", "Africa"),
    ("Zimbabwe", "Africa"),
    // Asia-Pacific Group
    ("Afghanistan", "Asia-Pacific"), ("Bahrain", "Asia-Pacific"), ("Bangladesh", "Asia-Pacific"),
    ("Bhutan", "Asia-Pacific"), ("Brunei Darussalam", "Asia-Pacific"), ("Cambodia", "Asia-Pacific"),
    ("China", "Asia-Pacific"), ("Cyprus", "Asia-Pacific"),
    ("Democratic People's Republic of Korea", "Asia-Pacific"),
    ("Fiji", "Asia-Pacific"), ("India", "Asia-Pacific"), ("Indonesia", "Asia-Pacific"),
    ("Iran", "Asia-Pacific"), ("Islamic Republic of Iran", "Asia-Pacific"), ("Iraq", "Asia-Pacific"),
    ("Japan", "Asia-Pacific"), ("Jordan", "Asia-Pacific"), ("Kazakhstan", "Asia-Pacific"),
    ("Kiribati", "Asia-Pacific"), ("Kuwait", "Asia-Pacific"), ("Kyrgyzstan", "Asia-Pacific"),
    ("Lao People's Democratic Republic", "Asia-Pacific"), ("Lebanon", "Asia-Pacific"),
    ("Malaysia", "Asia-Pacific"), ("Maldives", "Asia-Pacific"), ("Marshall Islands", "Asia-Pacific"),
    ("Micronesia", "Asia-Pacific"), ("Federated States of Micronesia", "Asia-Pacific"),
    ("Mongolia", "Asia-Pacific"), ("Myanmar", "Asia-Pacific"), ("Nauru", "Asia-Pacific"),
    ("Nepal", "Asia-Pacific"), ("Oman", "Asia-Pacific"), ("Pakistan", "Asia-Pacific"),
    ("Palau", "Asia-Pacific"), ("Papua New Guinea", "Asia-Pacific"), ("Philippines", "Asia-Pacific"),
    ("Qatar", "Asia-Pacific"), ("Republic of Korea", "Asia-Pacific"), ("Samoa", "Asia-Pacific"),
    ("Saudi Arabia", "Asia-Pacific"), ("Singapore", "Asia-Pacific"), ("Solomon Islands", "Asia-Pacific"),
    ("Sri Lanka", "Asia-Pacific"), ("Syrian Arab Republic", "Asia-Pacific"), ("Syria", "Asia-Pacific"),
    ("Tajikistan", "Asia-Pacific"), ("Thailand", "Asia-Pacific"), ("Timor-Leste", "Asia-Pacific"),
    ("Tonga", "Asia-Pacific"), ("Turkmenistan", "Asia-Pacific"), ("Tuvalu", "Asia-Pacific"),
    ("United Arab Emirates", "Asia-Pacific"), ("Uzbekistan", "Asia-Pacific"), ("Vanuatu", "Asia-Pacific"),
    ("Viet Nam", "Asia-Pacific"), ("Yemen", "Asia-Pacific"),
    // Eastern European Group
    ("Albania", "Eastern Europe"), ("Armenia", "Eastern Europe"), ("Azerbaijan", "Eastern Europe"),
    ("Belarus", "Eastern Europe"), ("Bosnia and Herzegovina", "Eastern Europe"),
    ("Bulgaria", "Eastern Europe"), ("Croatia", "Eastern Europe"), ("Czech Republic", "Eastern Europe"),
    ("Czechia", "Eastern Europe"), ("Estonia", "Eastern Europe"), ("Georgia", "Eastern Europe"),
    ("Hungary", "Eastern Europe"), ("Latvia", "Eastern Europe"), ("Lithuania", "Eastern Europe"),
    ("Montenegro", "Eastern Europe"), ("North Macedonia", "Eastern Europe"), ("Poland", "Eastern Europe"),
    ("Republic of Moldova", "Eastern Europe"), ("Moldova", "Eastern Europe"), ("Romania", "Eastern Europe"),
    ("Russian Federation", "Eastern Europe"), ("Serbia", "Eastern Europe"), ("Slovakia", "Eastern Europe"),
    ("Slovenia", "Eastern Europe"), ("Ukraine", "Eastern Europe"),
    // Latin American and Caribbean Group
    ("Antigua and Barbuda", "GRULAC"), ("Argentina", "GRULAC"), ("Bahamas", "GRULAC"),
    ("Barbados", "GRULAC"), ("Belize", "GRULAC"), ("Bolivia", "GRULAC"),
    ("Plurinational State of Bolivia", "GRULAC"), ("Brazil", "GRULAC"), ("Chile", "GRULAC"),
    ("Colombia", "GRULAC"), ("Costa Rica", "GRULAC"), ("Cuba", "GRULAC"), ("Dominica", "GRULAC"),
    ("Dominican Republic", "GRULAC"), ("Ecuador", "GRULAC"), ("El Salvador", "GRULAC"),
    ("Grenada", "GRULAC"), ("Guatemala", "GRULAC"), ("Guyana", "GRULAC"), ("Haiti", "GRULAC"),
    ("Honduras", "GRULAC"), ("Jamaica", "GRULAC"), ("Mexico", "GRULAC"), ("Nicaragua", "GRULAC"),
    ("Panama", "GRULAC"), ("Paraguay", "GRULAC"), ("Peru", "GRULAC"),
    ("Saint Kitts and Nevis", "GRULAC"), ("Saint Lucia", "GRULAC"),
    ("Saint Vincent and the Grenadines", "GRULAC"), ("St. Vincent and the Grenadines", "GRULAC"),
    ("Suriname", "GRULAC"), ("Trinidad and Tobago", "GRULAC"), ("Uruguay", "GRULAC"),
    ("Venezuela", "GRULAC"), ("Bolivarian Republic of Venezuela", "GRULAC"),
    // Western European and Others Group
    ("Andorra", "WEOG"), ("Australia", "WEOG"), ("Austria", "WEOG"), ("Belgium", "WEOG"),
    ("Canada", "WEOG"), ("Denmark", "WEOG"), ("Finland", "WEOG"), ("France", "WEOG"),
    ("Germany", "WEOG"), ("Greece", "WEOG"), ("Iceland", "WEOG"), ("Ireland", "WEOG"),
    ("Israel", "WEOG"), ("Italy", "WEOG"), ("Liechtenstein", "WEOG"), ("Luxembourg", "WEOG"),
    ("Malta", "WEOG"), ("Monaco", "WEOG"), ("Netherlands", "WEOG"), ("Kingdom of the Netherlands", "WEOG"),
    ("New Zealand", "WEOG"), ("Norway", "WEOG"), ("Portugal", "WEOG"), ("San Marino", "WEOG"),
    ("Spain", "WEOG"), ("Sweden", "WEOG"), ("Switzerland", "WEOG"), ("Turkey", "WEOG"),
    ("Türkiye", "WEOG"), ("United Kingdom", "WEOG"), ("United States", "WEOG"),
    ("United States of America", "WEOG"),
    // Observers
    ("Holy See", "Observer"), ("State of Palestine", "Observer"), ("Palestine", "Observer"),
];

static REGION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| REGION_TABLE.iter().copied().collect());

/// UN regional group for a country, or [`UNKNOWN_REGION`] if not found.
#[must_use]
pub fn region(country: &str) -> &'static str {
    REGION_MAP.get(country).copied().unwrap_or(UNKNOWN_REGION)
}

// Forum on China-Africa Cooperation, founded October 2000. All African
// states except Eswatini, which recognizes Taiwan. Countries that switched
// recognition later carry their switch year.
static FOCAC_JOIN: &[(&str, i32)] = &[
    ("Algeria", 2000), ("Angola", 2000), ("Benin", 2000), ("Botswana", 2000),
    ("Burkina Faso", 2000), ("Burundi", 2000), ("Cabo Verde", 2000), ("Cape Verde", 2000),
    ("Cameroon", 2000), ("Central African Republic", 2000), ("Chad", 2000), ("Comoros", 2000),
    ("Congo", 2000), ("Côte d'Ivoire", 2000), ("Democratic Republic of the Congo", 2000),
    ("Djibouti", 2000), ("Egypt", 2000), ("Equatorial Guinea", 2000), ("Eritrea", 2000),
    ("Ethiopia", 2000), ("Gabon", 2000), ("Gambia", 2016), ("Ghana", 2000), ("Guinea", 2000),
    ("Guinea-Bissau", 2000), ("Kenya", 2000), ("Lesotho", 2000), ("Liberia", 2000),
    ("Libya", 2000), ("Madagascar", 2000), ("Malawi", 2008), ("Mali", 2000),
    ("Mauritania", 2000), ("Mauritius", 2000), ("Morocco", 2000), ("Mozambique", 2000),
    ("Namibia", 2000), ("Niger", 2000), ("Nigeria", 2000), ("Rwanda", 2000),
    ("Sao Tome and Principe", 2016), ("Sao Tomé and Principe", 2016), ("Senegal", 2000),
    ("Seychelles", 2000), ("Sierra Leone", 2000), ("Somalia", 2000), ("South Africa", 2000),
    ("South Sudan", 2011), ("Sudan", 2000), ("Togo", 2000), ("Tunisia", 2000),
    ("Uganda", 2000), ("United Republic of Tanzania", 2000), ("Tanzania", 2000),
    ("Zambia", 2000), ("Zimbabwe", 2000),
];

// China-Arab States Cooperation Forum, founded January 2004. All Arab
// League member states.
static CASCF_JOIN: &[(&str, i32)] = &[
    ("Algeria", 2004), ("Bahrain", 2004), ("Comoros", 2004), ("Djibouti", 2004),
    ("Egypt", 2004), ("Iraq", 2004), ("Jordan", 2004), ("Kuwait", 2004),
    ("Lebanon", 2004), ("Libya", 2004), ("Mauritania", 2004), ("Morocco", 2004),
    ("Oman", 2004), ("State of Palestine", 2004), ("Palestine", 2004), ("Qatar", 2004),
    ("Saudi Arabia", 2004), ("Somalia", 2004), ("Sudan", 2004),
    ("Syrian Arab Republic", 2004), ("Syria", 2004), ("Tunisia", 2004),
    ("United Arab Emirates", 2004), ("Yemen", 2004),
];

// Shanghai Cooperation Organisation, founded June 2001 from the Shanghai
// Five. Full members only; observers and dialogue partners do not count.
static SCO_JOIN: &[(&str, i32)] = &[
    ("China", 2001), ("Russian Federation", 2001), ("Kazakhstan", 2001),
    ("Kyrgyzstan", 2001), ("Tajikistan", 2001), ("Uzbekistan", 2001),
    ("India", 2017), ("Pakistan", 2017),
    ("Iran", 2023), ("Islamic Republic of Iran", 2023),
    ("Belarus", 2024),
];

// Belt and Road Initiative, announced September 2013. Year of the signed
// memorandum of understanding with China.
static BRI_JOIN: &[(&str, i32)] = &[
    ("Belarus", 2013), ("Cambodia", 2013), ("China", 2013), ("Kyrgyzstan", 2013),
    ("Moldova", 2013), ("Pakistan", 2013),
    ("Thailand", 2014),
    ("Armenia", 2015), ("Azerbaijan", 2015), ("Bulgaria", 2015), ("Cameroon", 2015),
    ("Comoros", 2015), ("Czech Republic", 2015), ("Czechia", 2015), ("Hungary", 2015),
    ("Indonesia", 2015), ("Iraq", 2015), ("Kazakhstan", 2015), ("Poland", 2015),
    ("Romania", 2015), ("Serbia", 2015), ("Slovakia", 2015), ("Somalia", 2015),
    ("South Africa", 2015), ("Turkey", 2015), ("Türkiye", 2015), ("Uzbekistan", 2015),
    ("Egypt", 2016), ("Georgia", 2016), ("Myanmar", 2016), ("Papua New Guinea", 2016),
    ("Albania", 2017), ("Bosnia and Herzegovina", 2017), ("Côte d'Ivoire", 2017),
    ("Croatia", 2017), ("Estonia", 2017), ("Kenya", 2017), ("Latvia", 2017),
    ("Lithuania", 2017), ("Madagascar", 2017), ("Malaysia", 2017), ("Maldives", 2017),
    ("Montenegro", 2017), ("Morocco", 2017), ("Nepal", 2017), ("New Zealand", 2017),
    ("North Macedonia", 2017), ("Panama", 2017), ("Philippines", 2017), ("Slovenia", 2017),
    ("Sri Lanka", 2017), ("Timor-Leste", 2017), ("Turkmenistan", 2017), ("Ukraine", 2017),
    ("Viet Nam", 2017),
    ("Algeria", 2018), ("Angola", 2018), ("Antigua and Barbuda", 2018), ("Bahrain", 2018),
    ("Bangladesh", 2019), ("Barbados", 2019), ("Benin", 2018), ("Bolivia", 2018),
    ("Brunei Darussalam", 2018), ("Burundi", 2018), ("Chad", 2018), ("Chile", 2018),
    ("Cook Islands", 2018), ("Costa Rica", 2018), ("Djibouti", 2018), ("Dominica", 2018),
    ("Ecuador", 2018), ("El Salvador", 2018), ("Equatorial Guinea", 2019),
    ("Eritrea", 2021), ("Ethiopia", 2018), ("Fiji", 2018), ("Gabon", 2018), ("Ghana", 2018),
    ("Greece", 2018), ("Grenada", 2018), ("Guyana", 2018), ("Iran", 2018),
    ("Islamic Republic of Iran", 2018), ("Jamaica", 2019), ("Kuwait", 2018),
    ("Lao People's Democratic Republic", 2018), ("Lebanon", 2017), ("Lesotho", 2019),
    ("Liberia", 2019), ("Libya", 2018), ("Luxembourg", 2019), ("Mauritania", 2018),
    ("Micronesia", 2018), ("Federated States of Micronesia", 2018), ("Mozambique", 2018),
    ("Namibia", 2018), ("Niger", 2018), ("Nigeria", 2018), ("Niue", 2018), ("Oman", 2018),
    ("Peru", 2019), ("Portugal", 2018), ("Qatar", 2019), ("Rwanda", 2018), ("Samoa", 2018),
    ("Saudi Arabia", 2018), ("Senegal", 2018), ("Seychelles", 2018), ("Sierra Leone", 2018),
    ("Singapore", 2018), ("Solomon Islands", 2019), ("South Sudan", 2018), ("Sudan", 2018),
    ("Suriname", 2018), ("Tajikistan", 2018), ("Tanzania", 2018),
    ("United Republic of Tanzania", 2018), ("Togo", 2018), ("Tonga", 2018),
    ("Trinidad and Tobago", 2018), ("Tunisia", 2018), ("Uganda", 2018),
    ("United Arab Emirates", 2018), ("Uruguay", 2018), ("Vanuatu", 2018),
    ("Venezuela", 2018), ("Bolivarian Republic of Venezuela", 2018), ("Yemen", 2018),
    ("Zambia", 2018), ("Zimbabwe", 2018),
    ("Cyprus", 2019), ("Cuba", 2019), ("Dominican Republic", 2019), ("Italy", 2019),
    ("Kiribati", 2020), ("Mali", 2019),
    ("Botswana", 2021), ("Central African Republic", 2021),
    ("Democratic Republic of the Congo", 2021), ("Guinea-Bissau", 2021),
    ("Argentina", 2022), ("Malawi", 2022), ("Nicaragua", 2022),
    ("Syria", 2022), ("Syrian Arab Republic", 2022), ("Afghanistan", 2023),
    ("Honduras", 2023), ("Jordan", 2023),
];

// Countries that have withdrawn from the Belt and Road Initiative.
static BRI_EXIT: &[(&str, i32)] = &[
    ("Estonia", 2022), ("Latvia", 2022), ("Lithuania", 2021),
    ("Italy", 2023), ("Philippines", 2023), ("Panama", 2025),
];

// China-CELAC Forum, established July 2014 at the Brasilia summit. All 33
// CELAC member states.
static CELAC_JOIN: &[(&str, i32)] = &[
    ("Belize", 2014), ("Costa Rica", 2014), ("El Salvador", 2014), ("Guatemala", 2014),
    ("Honduras", 2014), ("Mexico", 2014), ("Nicaragua", 2014), ("Panama", 2014),
    ("Antigua and Barbuda", 2014), ("Bahamas", 2014), ("Barbados", 2014),
    ("Cuba", 2014), ("Dominica", 2014), ("Dominican Republic", 2014), ("Grenada", 2014),
    ("Guyana", 2014), ("Haiti", 2014), ("Jamaica", 2014),
    ("Saint Kitts and Nevis", 2014), ("Saint Lucia", 2014),
    ("Saint Vincent and the Grenadines", 2014), ("Suriname", 2014),
    ("Trinidad and Tobago", 2014),
    ("Argentina", 2014), ("Bolivia", 2014), ("Bolivarian Republic of Venezuela", 2014),
    ("Brazil", 2014), ("Chile", 2014), ("Colombia", 2014), ("Ecuador", 2014),
    ("Paraguay", 2014), ("Peru", 2014), ("Uruguay", 2014), ("Venezuela", 2014),
];

static FOCAC_MAP: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| FOCAC_JOIN.iter().copied().collect());
static CASCF_MAP: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| CASCF_JOIN.iter().copied().collect());
static SCO_MAP: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| SCO_JOIN.iter().copied().collect());
static BRI_MAP: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| BRI_JOIN.iter().copied().collect());
static BRI_EXIT_MAP: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| BRI_EXIT.iter().copied().collect());
static CELAC_MAP: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| CELAC_JOIN.iter().copied().collect());

/// Organizations whose membership is tracked per speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Organization {
    /// Forum on China-Africa Cooperation.
    Focac,
    /// China-Arab States Cooperation Forum.
    Cascf,
    /// Shanghai Cooperation Organisation.
    Sco,
    /// Belt and Road Initiative.
    Bri,
    /// China-CELAC Forum.
    Celac,
}

impl Organization {
    /// All tracked organizations, in output-column order.
    pub const ALL: [Self; 5] = [Self::Focac, Self::Cascf, Self::Sco, Self::Bri, Self::Celac];

    /// Short label used in metadata blocks and reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Focac => "FOCAC",
            Self::Cascf => "CASCF",
            Self::Sco => "SCO",
            Self::Bri => "BRI",
            Self::Celac => "CELAC",
        }
    }

    fn join_table(&self) -> &'static HashMap<&'static str, i32> {
        match self {
            Self::Focac => &FOCAC_MAP,
            Self::Cascf => &CASCF_MAP,
            Self::Sco => &SCO_MAP,
            Self::Bri => &BRI_MAP,
            Self::Celac => &CELAC_MAP,
        }
    }

    fn exit_table(&self) -> Option<&'static HashMap<&'static str, i32>> {
        // Only the BRI has seen withdrawals so far.
        match self {
            Self::Bri => Some(&BRI_EXIT_MAP),
            _ => None,
        }
    }

    /// Year the country joined, or `None` if never a member.
    #[must_use]
    pub fn join_year(&self, country: &str) -> Option<i32> {
        self.join_table().get(country).copied()
    }

    /// Year the country exited, or `None` if still a member (or never one).
    #[must_use]
    pub fn exit_year(&self, country: &str) -> Option<i32> {
        self.exit_table().and_then(|t| t.get(country).copied())
    }

    /// Evaluate membership for a speech delivered in `year`.
    ///
    /// A country is a member at speech time when it joined on or before
    /// the speech year and had not yet exited (`join <= year` and either
    /// no exit year or `year < exit`). An unknown speech year never
    /// counts as membership.
    #[must_use]
    pub fn membership(&self, country: &str, year: Option<i32>) -> Membership {
        let joined = self.join_year(country);
        let exited = self.exit_year(country);
        let at_speech_time = match (joined, year) {
            (Some(j), Some(y)) => y >= j && exited.map_or(true, |e| y < e),
            _ => false,
        };
        Membership {
            ever: joined.is_some(),
            joined,
            exited,
            at_speech_time,
        }
    }
}
