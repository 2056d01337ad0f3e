//! Two-language strings for the calculator's surrounding text.

use carbonprint_schemas::{language::Language, result::Rating};

pub fn about(language: Language) -> &'static str {
    match language {
        Language::English => "This calculator estimates your annual carbon footprint based on daily habits like transportation, electricity usage, diet, and lifestyle. Understand your impact and take action for a sustainable future!",
        Language::Indonesian => "Kalkulator ini memperkirakan jejak karbon tahunan Anda berdasarkan kebiasaan harian seperti transportasi, konsumsi listrik, pola makan, dan gaya hidup. Pahami dampakmu dan ambil langkah menuju masa depan berkelanjutan!",
    }
}

fn eco_tips(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "Use a bike or walk when possible.",
            "Switch to energy-saving LED lights.",
            "Try Meatless Mondays!",
            "Bring reusable bags when shopping.",
        ],
        Language::Indonesian => &[
            "Gunakan sepeda atau jalan kaki bila memungkinkan.",
            "Gunakan lampu LED hemat energi.",
            "Coba hari tanpa daging (Meatless Monday)!",
            "Bawa tas belanja yang bisa digunakan ulang.",
        ],
    }
}

/// Tip of the day; callers pass a day counter so the choice rotates without hidden state.
pub fn eco_tip(language: Language, day_index: u32) -> &'static str {
    let tips = eco_tips(language);
    tips[day_index as usize % tips.len()]
}

pub fn rating_label(rating: Rating, language: Language) -> &'static str {
    match (rating, language) {
        (Rating::Low, Language::English) => "Low",
        (Rating::Medium, Language::English) => "Medium",
        (Rating::High, Language::English) => "High",
        (Rating::Low, Language::Indonesian) => "Rendah",
        (Rating::Medium, Language::Indonesian) => "Sedang",
        (Rating::High, Language::Indonesian) => "Tinggi",
    }
}

/// Section headings shared by the terminal summary and the report document.
#[derive(Debug, Clone, Copy)]
pub struct Headings {
    pub title: &'static str,
    pub user_info: &'static str,
    pub total: &'static str,
    pub rating: &'static str,
    pub breakdown: &'static str,
    pub offset: &'static str,
    pub focus: &'static str,
    pub charts: &'static str,
    pub tip_of_the_day: &'static str,
    pub disclaimer: &'static str,
    pub name: &'static str,
    pub age: &'static str,
    pub country: &'static str,
    pub tonnes_per_year: &'static str,
    pub category_column: &'static str,
    pub tonnes_column: &'static str,
    pub share_column: &'static str,
    pub tree_absorption_note: &'static str,
}

pub fn headings(language: Language) -> Headings {
    match language {
        Language::English => Headings {
            title: "Carbon Footprint Report",
            user_info: "User Information",
            total: "Total Carbon Footprint",
            rating: "Carbon Footprint Rating",
            breakdown: "Emission Breakdown (tonnes CO2)",
            offset: "Trees Needed to Offset",
            focus: "Recommended Focus Area",
            charts: "Charts",
            tip_of_the_day: "Eco Tip of the Day",
            disclaimer: "Emission factors are approximations. Results may vary based on lifestyle and region.",
            name: "Name",
            age: "Age",
            country: "Country",
            tonnes_per_year: "tonnes CO2 per year",
            category_column: "Category",
            tonnes_column: "Tonnes CO2",
            share_column: "Share",
            tree_absorption_note: "one mature tree absorbs about 21 kg of CO2 per year",
        },
        Language::Indonesian => Headings {
            title: "Laporan Jejak Karbon",
            user_info: "Informasi Pengguna",
            total: "Total Jejak Karbon",
            rating: "Tingkat Jejak Karbon",
            breakdown: "Rincian Emisi (ton CO2)",
            offset: "Pohon untuk Mengimbangi Emisi",
            focus: "Fokus Utama",
            charts: "Grafik",
            tip_of_the_day: "Tips Ramah Lingkungan Hari Ini",
            disclaimer: "Faktor emisi merupakan perkiraan. Hasil dapat berbeda tergantung gaya hidup dan wilayah.",
            name: "Nama",
            age: "Usia",
            country: "Negara",
            tonnes_per_year: "ton CO2 per tahun",
            category_column: "Kategori",
            tonnes_column: "Ton CO2",
            share_column: "Porsi",
            tree_absorption_note: "satu pohon dewasa menyerap sekitar 21 kg CO2 per tahun",
        },
    }
}
