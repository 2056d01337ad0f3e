//! Static bilingual advice table keyed by emission category.

use carbonprint_schemas::{category::Category, language::Language};

fn advice(category: Category, language: Language) -> &'static [&'static str] {
    match (category, language) {
        (Category::Transportation, Language::English) => &[
            "Try using public transport or sharing rides (carpooling).",
            "Walk or cycle whenever you can.",
        ],
        (Category::Transportation, Language::Indonesian) => &[
            "Cobalah menggunakan transportasi umum atau berbagi kendaraan (carpool).",
            "Jika memungkinkan, pilih berjalan kaki atau bersepeda.",
        ],
        (Category::Flights, Language::English) => &[
            "Fly less often, especially on international routes.",
            "Use online meetings instead of business trips where possible.",
        ],
        (Category::Flights, Language::Indonesian) => &[
            "Kurangi frekuensi penerbangan, terutama penerbangan internasional.",
            "Gunakan konferensi daring bila memungkinkan untuk perjalanan bisnis.",
        ],
        (Category::Electricity, Language::English) => &[
            "Use energy-saving LED lights and unplug electronics you are not using.",
            "Consider installing solar panels if you can.",
        ],
        (Category::Electricity, Language::Indonesian) => &[
            "Gunakan lampu LED hemat energi dan cabut perangkat elektronik jika tidak digunakan.",
            "Pertimbangkan memasang panel surya jika memungkinkan.",
        ],
        (Category::Diet, Language::English) => &[
            "Eat less red and processed meat.",
            "Start with one meat-free day every week (Meatless Monday).",
        ],
        (Category::Diet, Language::Indonesian) => &[
            "Kurangi konsumsi daging merah dan olahan.",
            "Mulailah dengan satu hari tanpa daging setiap minggu (Meatless Monday).",
        ],
        (Category::Clothing, Language::English) => &[
            "Buy fewer new clothes; choose second-hand or durable, high-quality items.",
            "Recycle or donate clothes you no longer wear.",
        ],
        (Category::Clothing, Language::Indonesian) => &[
            "Kurangi pembelian pakaian baru; pilih produk second-hand atau berkualitas tinggi agar tahan lama.",
            "Daur ulang atau donasikan pakaian lama.",
        ],
        (Category::Plastic, Language::English) => &[
            "Carry reusable bottles and shopping bags.",
            "Avoid single-use items such as straws and plastic packaging.",
        ],
        (Category::Plastic, Language::Indonesian) => &[
            "Gunakan botol dan tas belanja yang dapat digunakan ulang.",
            "Hindari produk sekali pakai seperti sedotan dan kemasan plastik.",
        ],
        (Category::Waste, Language::English) => &[
            "Separate organic and inorganic waste.",
            "Compost kitchen scraps into natural fertilizer.",
        ],
        (Category::Waste, Language::Indonesian) => &[
            "Pisahkan sampah organik dan anorganik.",
            "Gunakan komposter untuk mengolah limbah dapur menjadi pupuk alami.",
        ],
    }
}

/// Advice lines for reducing emissions in `category`, in `language`.
pub fn recommend(category: Category, language: Language) -> Vec<String> {
    advice(category, language)
        .iter()
        .map(|line| line.to_string())
        .collect()
}

/// Like `recommend`, for a category given by label. Unknown labels yield no advice.
pub fn recommend_for_label(label: &str, language: Language) -> Vec<String> {
    label
        .parse::<Category>()
        .map(|category| recommend(category, language))
        .unwrap_or_default()
}
