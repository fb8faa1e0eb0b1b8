//! Reduction tips shown with every result.
//!
//! The lists are fixed per variant and do not depend on the answers or the
//! computed total.

static HABITS_TIPS: &[&str] = &[
    "Haftada 2-3 gün et tüketmeyerek yıllık 500-800 kg CO₂ tasarruf edebilirsiniz.",
    "Düzenli geri dönüşüm yaparak karbon ayak izinizi %10 azaltabilirsiniz.",
    "Yenilenebilir enerji kullanarak emisyonlarınızı %20 düşürebilirsiniz.",
    "Toplu taşımayı tercih ederek günlük 3-5 kg CO₂ tasarruf edebilirsiniz.",
    "Organik ve yerel gıdalar tercih ederek beslenme kaynaklı emisyonları azaltın.",
    "Su tasarrufu yaparak yıllık 200 kg CO₂ tasarruf edebilirsiniz.",
    "Işık tasarrufu yaparak elektrik tüketiminizi %5-10 azaltın.",
    "Ağaç dikme etkinliklerine katılarak doğaya katkıda bulunun.",
    "Online alışverişi azaltarak kargo kaynaklı emisyonları düşürün.",
];

static USAGE_TIPS: &[&str] = &[
    "Kısa mesafelerde araba yerine bisiklet veya toplu taşıma kullanın.",
    "Enerji verimli cihazlar ve LED aydınlatma ile elektrik tüketiminizi azaltın.",
    "Kışın termostatı 1-2 derece düşürerek doğalgaz tüketiminizi azaltın.",
    "Bitki ağırlıklı beslenerek gıda kaynaklı emisyonlarınızı yarıya indirebilirsiniz.",
];

pub fn habits_tips() -> &'static [&'static str] {
    HABITS_TIPS
}

pub fn usage_tips() -> &'static [&'static str] {
    USAGE_TIPS
}
