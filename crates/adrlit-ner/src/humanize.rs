//! Medical assessment paragraphs.
//!
//! The assessment is fixed text. "Humanizing" swaps it for one of four
//! fixed paraphrases chosen uniformly at random; nothing is generated.

use adrlit_common::LiteratureInsights;
use rand::Rng;

pub const BASE_ASSESSMENT: &str = "This case highlights an interaction between tramadol and risperidone leading to acute dyskinesia. \
Prompt withdrawal and therapeutic switch resulted in full recovery, emphasizing caution in polypharmacy.";

pub const HUMANIZED_VARIANTS: [&str; 4] = [
    "In this instance, the patient's adverse movements were linked to a tramadol–risperidone interaction. \
Early identification and medication adjustment led to full symptom resolution, stressing the need for cautious drug combinations.",
    "Here, a rare movement disorder was observed due to tramadol interacting with risperidone. \
Swift discontinuation and treatment modification helped achieve complete recovery, underscoring the value of clinical vigilance.",
    "This report discusses a patient who developed dyskinesia following a tramadol and risperidone interaction. \
Timely medical response resulted in full improvement, reflecting the importance of mindful prescribing in complex therapies.",
    "An unusual drug interaction between tramadol and risperidone caused involuntary movements in this case. \
Adjusting the regimen promptly restored normal motor function, highlighting the importance of medication review in such contexts.",
];

/// One of the four paraphrases, uniformly at random.
pub fn humanize<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    HUMANIZED_VARIANTS[rng.gen_range(0..HUMANIZED_VARIANTS.len())]
}

/// Replace the record's assessment with a paraphrase.
pub fn humanize_insights<R: Rng + ?Sized>(insights: &mut LiteratureInsights, rng: &mut R) {
    insights.medical_assessment = humanize(rng).to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_always_one_of_the_variants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(HUMANIZED_VARIANTS.contains(&humanize(&mut rng)));
        }
    }

    #[test]
    fn test_every_variant_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let chosen = humanize(&mut rng);
            let idx = HUMANIZED_VARIANTS.iter().position(|v| *v == chosen).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let a = humanize(&mut StdRng::seed_from_u64(3));
        let b = humanize(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
        assert_ne!(a, BASE_ASSESSMENT);
    }
}
