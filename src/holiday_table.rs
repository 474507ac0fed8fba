//! The static holiday table.
//!
//! Rosh Chodesh entries come last so they sort after any holiday sharing
//! their day.

use crate::holiday::{Holiday, HolidayKind, HolidayName, Region, Rule, Shift};
use crate::julian::Weekday;
use crate::month::HebrewMonth::{self, *};

const ADAR_OR_ADAR_II: &[HebrewMonth] = &[Adar, AdarII];
const ALL_MONTHS: &[HebrewMonth] = &[
    Tishrei,
    Marcheshvan,
    Kislev,
    Tevet,
    Shvat,
    Adar,
    AdarI,
    AdarII,
    Nisan,
    Iyyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
];
const ALL_BUT_TISHREI: &[HebrewMonth] = &[
    Marcheshvan,
    Kislev,
    Tevet,
    Shvat,
    Adar,
    AdarI,
    AdarII,
    Nisan,
    Iyyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
];

const SHABBAT_TO_SUNDAY: &[Shift] = &[Shift { on: Weekday::Saturday, by: 1 }];
const SHABBAT_TO_THURSDAY: &[Shift] = &[Shift { on: Weekday::Saturday, by: -2 }];
const FRIDAY_TO_THURSDAY: &[Shift] = &[Shift { on: Weekday::Friday, by: -1 }];
const YOM_HASHOAH_SHIFTS: &[Shift] = &[
    Shift { on: Weekday::Friday, by: -1 },
    Shift { on: Weekday::Sunday, by: 1 },
];

/// Yom HaAtzmaut never touches Shabbat.
const ATZMAUT_SHIFTS: &[Shift] = &[
    Shift { on: Weekday::Friday, by: -1 },
    Shift { on: Weekday::Saturday, by: -2 },
];
/// Since 5764 it also avoids Sunday evening for Yom HaZikaron.
const ATZMAUT_SHIFTS_5764: &[Shift] = &[
    Shift { on: Weekday::Friday, by: -1 },
    Shift { on: Weekday::Saturday, by: -2 },
    Shift { on: Weekday::Monday, by: 1 },
];
// Yom HaZikaron is the eve of Yom HaAtzmaut; shifts are keyed on 4 Iyyar.
const ZIKARON_SHIFTS: &[Shift] = &[
    Shift { on: Weekday::Thursday, by: -1 },
    Shift { on: Weekday::Friday, by: -2 },
];
const ZIKARON_SHIFTS_5764: &[Shift] = &[
    Shift { on: Weekday::Thursday, by: -1 },
    Shift { on: Weekday::Friday, by: -2 },
    Shift { on: Weekday::Sunday, by: 1 },
];

const fn holiday(
    kind: HolidayKind,
    name: HolidayName,
    days: &'static [u8],
    months: &'static [HebrewMonth],
) -> Holiday {
    Holiday { kind, name, days, months, rules: &[], region: Region::Any }
}

const fn ruled(
    kind: HolidayKind,
    name: HolidayName,
    days: &'static [u8],
    months: &'static [HebrewMonth],
    rules: &'static [Rule],
    region: Region,
) -> Holiday {
    Holiday { kind, name, days, months, rules, region }
}

pub(crate) static HOLIDAYS: &[Holiday] = &[
    // Elul / Tishrei
    holiday(HolidayKind::ErevYomTov, HolidayName::ErevRoshHashana, &[29], &[Elul]),
    holiday(HolidayKind::YomTov, HolidayName::RoshHashanaI, &[1], &[Tishrei]),
    holiday(HolidayKind::YomTov, HolidayName::RoshHashanaII, &[2], &[Tishrei]),
    ruled(
        HolidayKind::FastDay,
        HolidayName::TzomGedaliah,
        &[3, 4],
        &[Tishrei],
        &[Rule::Postponable { day: 3, month: Some(Tishrei), shifts: SHABBAT_TO_SUNDAY }],
        Region::Any,
    ),
    holiday(HolidayKind::ErevYomTov, HolidayName::ErevYomKippur, &[9], &[Tishrei]),
    holiday(HolidayKind::YomTov, HolidayName::YomKippur, &[10], &[Tishrei]),
    holiday(HolidayKind::ErevYomTov, HolidayName::ErevSukkot, &[14], &[Tishrei]),
    holiday(HolidayKind::YomTov, HolidayName::Sukkot, &[15], &[Tishrei]),
    ruled(HolidayKind::YomTov, HolidayName::SukkotII, &[16], &[Tishrei], &[], Region::DiasporaOnly),
    ruled(
        HolidayKind::HolHamoed,
        HolidayName::HolHamoedSukkot,
        &[16, 17, 18, 19, 20],
        &[Tishrei],
        &[],
        Region::IsraelOnly,
    ),
    ruled(
        HolidayKind::HolHamoed,
        HolidayName::HolHamoedSukkot,
        &[17, 18, 19, 20],
        &[Tishrei],
        &[],
        Region::DiasporaOnly,
    ),
    holiday(HolidayKind::ErevYomTov, HolidayName::HoshanaRaba, &[21], &[Tishrei]),
    holiday(HolidayKind::YomTov, HolidayName::ShminiAtzeret, &[22], &[Tishrei]),
    ruled(HolidayKind::YomTov, HolidayName::SimchatTorah, &[22], &[Tishrei], &[], Region::IsraelOnly),
    ruled(HolidayKind::YomTov, HolidayName::SimchatTorah, &[23], &[Tishrei], &[], Region::DiasporaOnly),
    // Marcheshvan
    ruled(
        HolidayKind::MemorialDay,
        HolidayName::RabinMemorialDay,
        &[11, 12],
        &[Marcheshvan],
        &[
            Rule::Postponable { day: 12, month: Some(Marcheshvan), shifts: FRIDAY_TO_THURSDAY },
            Rule::Since(5758),
        ],
        Region::IsraelOnly,
    ),
    ruled(
        HolidayKind::MinorHoliday,
        HolidayName::Sigd,
        &[29],
        &[Marcheshvan],
        &[Rule::Since(5769)],
        Region::IsraelOnly,
    ),
    // Kislev / Tevet
    holiday(HolidayKind::MelachaPermitted, HolidayName::Chanukah, &[25, 26, 27, 28, 29, 30], &[Kislev]),
    holiday(HolidayKind::MelachaPermitted, HolidayName::Chanukah, &[1, 2], &[Tevet]),
    ruled(
        HolidayKind::MelachaPermitted,
        HolidayName::Chanukah,
        &[3],
        &[Tevet],
        &[Rule::ShortKislev],
        Region::Any,
    ),
    holiday(HolidayKind::FastDay, HolidayName::AsaraBtevet, &[10], &[Tevet]),
    // Shvat / Adar
    holiday(HolidayKind::MinorHoliday, HolidayName::TuBshvat, &[15], &[Shvat]),
    ruled(
        HolidayKind::ModernHoliday,
        HolidayName::FamilyDay,
        &[30],
        &[Shvat],
        &[Rule::Since(5734)],
        Region::IsraelOnly,
    ),
    ruled(
        HolidayKind::MemorialDay,
        HolidayName::MemorialDayUnknown,
        &[7],
        ADAR_OR_ADAR_II,
        &[Rule::CorrectAdar],
        Region::IsraelOnly,
    ),
    ruled(
        HolidayKind::FastDay,
        HolidayName::TaanitEsther,
        &[11, 13],
        ADAR_OR_ADAR_II,
        &[
            Rule::CorrectAdar,
            Rule::Postponable { day: 13, month: None, shifts: SHABBAT_TO_THURSDAY },
        ],
        Region::Any,
    ),
    ruled(
        HolidayKind::MelachaPermitted,
        HolidayName::Purim,
        &[14],
        ADAR_OR_ADAR_II,
        &[Rule::CorrectAdar],
        Region::Any,
    ),
    ruled(
        HolidayKind::MelachaPermitted,
        HolidayName::ShushanPurim,
        &[15],
        ADAR_OR_ADAR_II,
        &[Rule::CorrectAdar],
        Region::Any,
    ),
    // Nisan
    ruled(
        HolidayKind::ModernHoliday,
        HolidayName::YomHaaliyah,
        &[10],
        &[Nisan],
        &[Rule::Since(5777)],
        Region::IsraelOnly,
    ),
    holiday(HolidayKind::ErevYomTov, HolidayName::ErevPesach, &[14], &[Nisan]),
    holiday(HolidayKind::YomTov, HolidayName::Pesach, &[15], &[Nisan]),
    ruled(HolidayKind::YomTov, HolidayName::PesachII, &[16], &[Nisan], &[], Region::DiasporaOnly),
    ruled(
        HolidayKind::HolHamoed,
        HolidayName::HolHamoedPesach,
        &[16, 17, 18, 19, 20],
        &[Nisan],
        &[],
        Region::IsraelOnly,
    ),
    ruled(
        HolidayKind::HolHamoed,
        HolidayName::HolHamoedPesach,
        &[17, 18, 19, 20],
        &[Nisan],
        &[],
        Region::DiasporaOnly,
    ),
    holiday(HolidayKind::YomTov, HolidayName::PesachVII, &[21], &[Nisan]),
    ruled(HolidayKind::YomTov, HolidayName::PesachVIII, &[22], &[Nisan], &[], Region::DiasporaOnly),
    ruled(
        HolidayKind::MemorialDay,
        HolidayName::YomHashoah,
        &[26, 27, 28],
        &[Nisan],
        &[
            Rule::Postponable { day: 27, month: Some(Nisan), shifts: YOM_HASHOAH_SHIFTS },
            Rule::Since(5718),
        ],
        Region::Any,
    ),
    // Iyyar
    ruled(
        HolidayKind::MemorialDay,
        HolidayName::YomHazikaron,
        &[2, 3, 4],
        &[Iyyar],
        &[
            Rule::Postponable { day: 4, month: Some(Iyyar), shifts: ZIKARON_SHIFTS },
            Rule::Since(5709),
            Rule::Before(5764),
        ],
        Region::Any,
    ),
    ruled(
        HolidayKind::MemorialDay,
        HolidayName::YomHazikaron,
        &[2, 3, 4, 5],
        &[Iyyar],
        &[
            Rule::Postponable { day: 4, month: Some(Iyyar), shifts: ZIKARON_SHIFTS_5764 },
            Rule::Since(5764),
        ],
        Region::Any,
    ),
    ruled(
        HolidayKind::IsraelNationalHoliday,
        HolidayName::YomHaatzmaut,
        &[3, 4, 5],
        &[Iyyar],
        &[
            Rule::Postponable { day: 5, month: Some(Iyyar), shifts: ATZMAUT_SHIFTS },
            Rule::Since(5709),
            Rule::Before(5764),
        ],
        Region::Any,
    ),
    ruled(
        HolidayKind::IsraelNationalHoliday,
        HolidayName::YomHaatzmaut,
        &[3, 4, 5, 6],
        &[Iyyar],
        &[
            Rule::Postponable { day: 5, month: Some(Iyyar), shifts: ATZMAUT_SHIFTS_5764 },
            Rule::Since(5764),
        ],
        Region::Any,
    ),
    holiday(HolidayKind::MinorHoliday, HolidayName::PesachSheni, &[14], &[Iyyar]),
    holiday(HolidayKind::MinorHoliday, HolidayName::LagBomer, &[18], &[Iyyar]),
    ruled(
        HolidayKind::ModernHoliday,
        HolidayName::YomYerushalayim,
        &[28],
        &[Iyyar],
        &[Rule::Since(5728)],
        Region::Any,
    ),
    // Sivan
    holiday(HolidayKind::ErevYomTov, HolidayName::ErevShavuot, &[5], &[Sivan]),
    holiday(HolidayKind::YomTov, HolidayName::Shavuot, &[6], &[Sivan]),
    ruled(HolidayKind::YomTov, HolidayName::ShavuotII, &[7], &[Sivan], &[], Region::DiasporaOnly),
    // Tammuz / Av
    ruled(
        HolidayKind::FastDay,
        HolidayName::TzomTammuz,
        &[17, 18],
        &[Tammuz],
        &[Rule::Postponable { day: 17, month: Some(Tammuz), shifts: SHABBAT_TO_SUNDAY }],
        Region::Any,
    ),
    ruled(
        HolidayKind::MemorialDay,
        HolidayName::ZeevZhabotinskyDay,
        &[29, 1],
        &[Tammuz, Av],
        &[
            Rule::Postponable { day: 29, month: Some(Tammuz), shifts: SHABBAT_TO_SUNDAY },
            Rule::Since(5765),
        ],
        Region::IsraelOnly,
    ),
    ruled(
        HolidayKind::FastDay,
        HolidayName::TishaBav,
        &[9, 10],
        &[Av],
        &[Rule::Postponable { day: 9, month: Some(Av), shifts: SHABBAT_TO_SUNDAY }],
        Region::Any,
    ),
    holiday(HolidayKind::MinorHoliday, HolidayName::TuBav, &[15], &[Av]),
    // Rosh Chodesh
    holiday(HolidayKind::RoshChodesh, HolidayName::RoshChodesh, &[30], ALL_MONTHS),
    holiday(HolidayKind::RoshChodesh, HolidayName::RoshChodesh, &[1], ALL_BUT_TISHREI),
];
