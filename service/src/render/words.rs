//! Spelling of monetary amounts in Brazilian-Portuguese words.

use common::Money;

/// Number words below twenty.
const UNITS: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

/// Number words for whole tens.
const TENS: [&str; 10] = [
    "",
    "dez",
    "vinte",
    "trinta",
    "quarenta",
    "cinquenta",
    "sessenta",
    "setenta",
    "oitenta",
    "noventa",
];

/// Number words for whole hundreds (`cem` is special-cased).
const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Spells out the provided amount, e.g. `mil e quinhentos reais e
/// cinquenta centavos`.
///
/// Whole reais and centavos are both spelled when present, joined by
/// `e`; a zero amount reads `zero reais`.
#[must_use]
pub fn amount(money: Money) -> String {
    let cents = money.cents();
    let (reais, centavos) = (cents / 100, cents % 100);

    if cents == 0 {
        return "zero reais".to_owned();
    }

    let mut out = String::new();
    if reais > 0 {
        out.push_str(&cardinal(reais));
        // Round millions take the partitive: "um milhão de reais".
        if reais >= 1_000_000 && reais % 1_000_000 == 0 {
            out.push_str(" de");
        }
        out.push_str(if reais == 1 { " real" } else { " reais" });
    }
    if centavos > 0 {
        if reais > 0 {
            out.push_str(" e ");
        }
        out.push_str(&cardinal(centavos));
        out.push_str(if centavos == 1 { " centavo" } else { " centavos" });
    }
    out
}

/// Spells a cardinal number, covering values up to the billions.
fn cardinal(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_owned();
    }

    /// Scale value with its one/many spellings.
    const SCALES: [(u64, &str, &str); 3] = [
        (1_000_000_000, "um bilhão", "bilhões"),
        (1_000_000, "um milhão", "milhões"),
        (1_000, "mil", "mil"),
    ];

    let mut segments = Vec::new();
    let mut rest = n;
    for (scale, one, many) in SCALES {
        let count = rest / scale;
        rest %= scale;
        if count == 0 {
            continue;
        }
        let text = if count == 1 {
            // "mil", never "um mil".
            one.to_owned()
        } else {
            format!("{} {many}", under_thousand(count))
        };
        segments.push((count, text));
    }
    if rest > 0 {
        segments.push((rest, under_thousand(rest)));
    }

    let mut out = String::new();
    let last = segments.len() - 1;
    for (i, (value, text)) in segments.iter().enumerate() {
        if i > 0 {
            // "e" joins the final group when it is below a hundred or a
            // round hundred: "mil e quinhentos", but "mil trezentos e
            // setenta e cinco".
            let joined = i == last && (*value < 100 || value % 100 == 0);
            out.push_str(if joined { " e " } else { " " });
        }
        out.push_str(text);
    }
    out
}

/// Spells a `1..=999` number.
#[expect(
    clippy::cast_possible_truncation,
    reason = "digit indexes fit in `usize`"
)]
fn under_thousand(n: u64) -> String {
    if n == 100 {
        return "cem".to_owned();
    }

    let (hundreds, rest) = (n / 100, n % 100);
    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(HUNDREDS[hundreds as usize]);
    }
    if rest > 0 {
        if hundreds > 0 {
            out.push_str(" e ");
        }
        if rest < 20 {
            out.push_str(UNITS[rest as usize]);
        } else {
            out.push_str(TENS[(rest / 10) as usize]);
            if rest % 10 > 0 {
                out.push_str(" e ");
                out.push_str(UNITS[(rest % 10) as usize]);
            }
        }
    }
    out
}
