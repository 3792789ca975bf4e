// src/models/agreement.rs
use serde::Serialize;

/// Static metadata for one of Israel's trade agreements.
#[derive(Debug, Clone, Serialize)]
pub struct TradeAgreement {
    pub code: &'static str,
    pub name: &'static str,
    pub name_he: &'static str,
    pub year: i32,
}

/// The agreements Israel has, in the order clients expect them.
pub const TRADE_AGREEMENTS: &[TradeAgreement] = &[
    TradeAgreement { code: "2", name: "Israel-USA FTA", name_he: "הסכם ישראל-ארה\"ב", year: 1985 },
    TradeAgreement { code: "92", name: "Israel-EU Association", name_he: "הסכם ישראל-אירופה", year: 1995 },
    TradeAgreement { code: "EFTA", name: "Israel-EFTA", name_he: "הסכם ישראל-EFTA", year: 1992 },
    TradeAgreement { code: "CA", name: "Israel-Canada FTA", name_he: "הסכם ישראל-קנדה", year: 1997 },
    TradeAgreement { code: "MX", name: "Israel-Mexico FTA", name_he: "הסכם ישראל-מקסיקו", year: 2000 },
    TradeAgreement { code: "TR", name: "Israel-Turkey FTA", name_he: "הסכם ישראל-טורקיה", year: 1997 },
    TradeAgreement { code: "KR", name: "Israel-South Korea FTA", name_he: "הסכם ישראל-קוריאה", year: 2021 },
    TradeAgreement { code: "AE", name: "Israel-UAE FTA", name_he: "הסכם ישראל-איחוד האמירויות", year: 2022 },
    TradeAgreement { code: "UA", name: "Israel-Ukraine FTA", name_he: "הסכם ישראל-אוקראינה", year: 2021 },
    TradeAgreement { code: "VN", name: "Israel-Vietnam FTA", name_he: "הסכם ישראל-וייטנאם", year: 2024 },
    TradeAgreement { code: "JO", name: "Israel-Jordan FTA", name_he: "הסכם ישראל-ירדן", year: 1995 },
    TradeAgreement { code: "EG", name: "Israel-Egypt QIZ", name_he: "אזורי QIZ ישראל-מצרים", year: 2005 },
    TradeAgreement { code: "CO", name: "Israel-Colombia FTA", name_he: "הסכם ישראל-קולומביה", year: 2020 },
    TradeAgreement { code: "PA", name: "Israel-Panama FTA", name_he: "הסכם ישראל-פנמה", year: 2020 },
    TradeAgreement { code: "MERCOSUR", name: "Israel-Mercosur", name_he: "הסכם ישראל-מרקוסור", year: 2007 },
];
