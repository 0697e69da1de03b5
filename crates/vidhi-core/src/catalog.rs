//! Static catalog of Indian legislation.
//!
//! The table is the artifact: a fixed, ordered list of Indian laws grouped by
//! category, each pointing at its official text on legislative.gov.in. Records
//! are immutable once defined here; the loader sends them to the remote store
//! as-is, in this order.

use crate::law::{Category, LawRecord};

fn law(
    title: &str,
    description: &str,
    category: Category,
    year_enacted: i32,
    official_url: &str,
) -> LawRecord {
    LawRecord {
        title: title.to_string(),
        description: description.to_string(),
        category,
        year_enacted,
        status: "Active".to_string(),
        official_url: official_url.to_string(),
    }
}

/// The full Indian law catalog, in deterministic source order.
pub fn indian_laws() -> Vec<LawRecord> {
    use Category::*;

    vec![
        // Constitutional
        law(
            "Constitution of India",
            "The supreme law of India. It lays down the framework defining fundamental political principles, establishes the structure, procedures, powers and duties of government institutions and sets out fundamental rights, directive principles and duties of citizens.",
            Constitutional,
            1950,
            "https://legislative.gov.in/constitution-of-india",
        ),
        law(
            "Right to Information Act",
            "Provides for setting out the practical regime of right to information for citizens to secure access to information under the control of public authorities.",
            Constitutional,
            2005,
            "https://legislative.gov.in/sites/default/files/A2005-22.pdf",
        ),
        law(
            "Right to Education Act",
            "Provides for free and compulsory education to all children of age six to fourteen years.",
            Constitutional,
            2009,
            "https://legislative.gov.in/sites/default/files/A2009-35.pdf",
        ),
        law(
            "Scheduled Castes and Scheduled Tribes (Prevention of Atrocities) Act",
            "Prevents atrocities against members of Scheduled Castes and Scheduled Tribes.",
            Constitutional,
            1989,
            "https://legislative.gov.in/sites/default/files/A1989-33.pdf",
        ),
        law(
            "Citizenship Act",
            "Provides for acquisition and determination of citizenship.",
            Constitutional,
            1955,
            "https://legislative.gov.in/sites/default/files/A1955-57.pdf",
        ),
        law(
            "Protection of Human Rights Act",
            "Provides for constitution of National Human Rights Commission, State Human Rights Commissions and Human Rights Courts for better protection of human rights.",
            Constitutional,
            1993,
            "https://legislative.gov.in/sites/default/files/A1994-10.pdf",
        ),
        // Criminal
        law(
            "Indian Penal Code (IPC)",
            "The main criminal code of India that covers all substantive aspects of criminal law. It defines crimes and provides punishments for almost all kinds of criminal and actionable wrongs.",
            Criminal,
            1860,
            "https://legislative.gov.in/sites/default/files/A1860-45.pdf",
        ),
        law(
            "Code of Criminal Procedure (CrPC)",
            "The main legislation on procedural aspects of criminal law in India. It provides the machinery for the investigation of crime, apprehension of suspected criminals, collection of evidence, determination of guilt or innocence of the accused person and the determination of punishment.",
            Criminal,
            1973,
            "https://legislative.gov.in/sites/default/files/A1974-2.pdf",
        ),
        law(
            "Bharatiya Nyaya Sanhita (BNS)",
            "Modern replacement for the Indian Penal Code. It modernizes criminal law provisions while retaining the essence of justice delivery. Effective from July 1, 2024.",
            Criminal,
            2023,
            "https://legislative.gov.in/sites/default/files/sansad_TV/LS_bill39of2023_1.pdf",
        ),
        law(
            "Indian Evidence Act",
            "The law of evidence in India. It contains a set of rules and allied issues governing admissibility of evidence in Indian courts.",
            Criminal,
            1872,
            "https://legislative.gov.in/sites/default/files/A1872-01.pdf",
        ),
        law(
            "Prevention of Corruption Act",
            "Consolidates and amends the law relating to prevention of corruption and matters connected therewith.",
            Criminal,
            1988,
            "https://legislative.gov.in/sites/default/files/A1988-49.pdf",
        ),
        law(
            "Protection of Children from Sexual Offences Act (POCSO)",
            "Provides for protection of children from offences of sexual assault, sexual harassment and pornography.",
            Criminal,
            2012,
            "https://legislative.gov.in/sites/default/files/A2012-32_0.pdf",
        ),
        law(
            "Juvenile Justice (Care and Protection of Children) Act",
            "Consolidates and amends the law relating to children alleged and found to be in conflict with law and children in need of care and protection.",
            Criminal,
            2015,
            "https://legislative.gov.in/sites/default/files/A2016-2.pdf",
        ),
        // Civil
        law(
            "Code of Civil Procedure (CPC)",
            "The procedural law governing civil litigation in India. It regulates every action of a civil court and parties until the execution of decree and order.",
            Civil,
            1908,
            "https://legislative.gov.in/sites/default/files/A1908-05.pdf",
        ),
        law(
            "Indian Contract Act",
            "Regulates contracts in India and determines the circumstances in which promises made by parties to a contract shall be legally binding. It contains the general principles of contract law.",
            Civil,
            1872,
            "https://legislative.gov.in/sites/default/files/A1872-09.pdf",
        ),
        law(
            "Consumer Protection Act",
            "Provides for protection of interests of consumers. It establishes authorities for timely and effective administration and settlement of consumer disputes.",
            Civil,
            2019,
            "https://legislative.gov.in/sites/default/files/A2019-35.pdf",
        ),
        law(
            "Motor Vehicles Act",
            "Regulates all aspects of road transport vehicles. It deals with registration of vehicles, licensing of drivers, control of traffic, insurance, and compensation.",
            Civil,
            1988,
            "https://legislative.gov.in/sites/default/files/A1988-59.pdf",
        ),
        law(
            "Negotiable Instruments Act",
            "Defines and amends the law relating to promissory notes, bills of exchange and cheques.",
            Civil,
            1881,
            "https://legislative.gov.in/sites/default/files/A1881-26.pdf",
        ),
        law(
            "Arbitration and Conciliation Act",
            "Consolidates and amends the law relating to domestic arbitration, international commercial arbitration and enforcement of foreign arbitral awards.",
            Civil,
            1996,
            "https://legislative.gov.in/sites/default/files/A1996-26.pdf",
        ),
        law(
            "Environment Protection Act",
            "Provides for protection and improvement of environment and for matters connected therewith.",
            Civil,
            1986,
            "https://legislative.gov.in/sites/default/files/A1986-29.pdf",
        ),
        // Property
        law(
            "Transfer of Property Act",
            "Defines and amends the law relating to transfer of property by act of parties. It deals with transfer of property between living persons.",
            Property,
            1882,
            "https://legislative.gov.in/sites/default/files/A1882-04.pdf",
        ),
        law(
            "Registration Act",
            "Consolidates the law relating to registration of documents. It provides for registration of certain documents and matters connected therewith.",
            Property,
            1908,
            "https://legislative.gov.in/sites/default/files/A1908-16_0.pdf",
        ),
        law(
            "Land Acquisition Act",
            "Provides for acquisition of land for public purposes and for matters connected therewith or incidental thereto.",
            Property,
            2013,
            "https://legislative.gov.in/sites/default/files/A2013-30_0.pdf",
        ),
        // Family
        law(
            "Hindu Marriage Act",
            "Codifies the law relating to marriage among Hindus. It deals with conditions for a Hindu Marriage, registration, divorce, judicial separation, restitution of conjugal rights and legitimacy of children.",
            Family,
            1955,
            "https://legislative.gov.in/sites/default/files/A1955-25.pdf",
        ),
        law(
            "Hindu Succession Act",
            "Amends and codifies the law relating to intestate succession among Hindus. It deals with succession and inheritance of property.",
            Family,
            1956,
            "https://legislative.gov.in/sites/default/files/A1956-30.pdf",
        ),
        law(
            "Dowry Prohibition Act",
            "Prohibits the giving or taking of dowry at or before or any time after the marriage. It provides for penalties for violation.",
            Family,
            1961,
            "https://legislative.gov.in/sites/default/files/A1961-28.pdf",
        ),
        law(
            "Protection of Women from Domestic Violence Act",
            "Provides for protection of women from domestic violence and matters connected therewith or incidental thereto.",
            Family,
            2005,
            "https://legislative.gov.in/sites/default/files/A2005-43.pdf",
        ),
        law(
            "Muslim Personal Law (Shariat) Application Act",
            "Provides for the application of Muslim personal law to Muslims in matters of succession, inheritance, marriage and others.",
            Family,
            1937,
            "https://legislative.gov.in/sites/default/files/A1937-26.pdf",
        ),
        law(
            "Hindu Adoption and Maintenance Act",
            "Amends and codifies the law relating to adoptions and maintenance among Hindus.",
            Family,
            1956,
            "https://legislative.gov.in/sites/default/files/A1956-78.pdf",
        ),
        law(
            "Special Marriage Act",
            "Provides a special form of marriage in certain cases and for registration of certain marriages. It applies to all citizens of India.",
            Family,
            1954,
            "https://legislative.gov.in/sites/default/files/A1954-43.pdf",
        ),
        law(
            "Indian Divorce Act",
            "Amends and consolidates the law relating to divorce among Christians.",
            Family,
            1869,
            "https://legislative.gov.in/sites/default/files/A1869-04.pdf",
        ),
        // Labor and employment
        law(
            "Minimum Wages Act",
            "Provides for minimum rates of wages in certain employments. It aims to prevent exploitation of workers.",
            Labor,
            1948,
            "https://legislative.gov.in/sites/default/files/A1948-11.pdf",
        ),
        law(
            "Payment of Bonus Act",
            "Provides for payment of bonus to employees in certain establishments on the basis of profits or productivity.",
            Labor,
            1965,
            "https://legislative.gov.in/sites/default/files/A1965-21_0.pdf",
        ),
        law(
            "Industrial Disputes Act",
            "Provides for investigation and settlement of industrial disputes. It regulates strikes, lockouts, layoffs and retrenchments.",
            Labor,
            1947,
            "https://legislative.gov.in/sites/default/files/A1947-14.pdf",
        ),
        law(
            "Employees Provident Funds and Miscellaneous Provisions Act",
            "Provides for institution of provident funds, family pension fund and deposit-linked insurance fund for employees.",
            Labor,
            1952,
            "https://legislative.gov.in/sites/default/files/A1952-19.pdf",
        ),
        law(
            "Employees State Insurance Act",
            "Provides for certain benefits to employees in case of sickness, maternity and employment injury.",
            Labor,
            1948,
            "https://legislative.gov.in/sites/default/files/A1948-34.pdf",
        ),
        law(
            "Payment of Gratuity Act",
            "Provides for payment of gratuity to employees engaged in factories, mines, oilfields, plantations, ports, railway companies, shops or other establishments.",
            Labor,
            1972,
            "https://legislative.gov.in/sites/default/files/A1972-39.pdf",
        ),
        law(
            "Factories Act",
            "Regulates labour in factories. It provides for health, safety, welfare, working hours, leave and other matters in relation to workers employed therein.",
            Labor,
            1948,
            "https://legislative.gov.in/sites/default/files/A1948-63.pdf",
        ),
        law(
            "Sexual Harassment of Women at Workplace Act",
            "Provides for protection against sexual harassment of women at workplace and prevention and redressal of complaints.",
            Labor,
            2013,
            "https://legislative.gov.in/sites/default/files/A2013-14_0.pdf",
        ),
        // Tax
        law(
            "Income Tax Act",
            "The charging statute of Income Tax in India. It provides for levy, administration, collection and recovery of Income Tax.",
            Tax,
            1961,
            "https://incometaxindia.gov.in/pages/acts/income-tax-act.aspx",
        ),
        law(
            "Central Goods and Services Tax Act (CGST)",
            "Provides for levy and collection of tax on intra-state supply of goods or services or both by the Central Government.",
            Tax,
            2017,
            "https://legislative.gov.in/sites/default/files/A2017-12.pdf",
        ),
        law(
            "Customs Act",
            "Consolidates and amends the law relating to customs. It regulates imports and exports, and levies customs duties.",
            Tax,
            1962,
            "https://legislative.gov.in/sites/default/files/A1962-52_0.pdf",
        ),
        law(
            "Integrated Goods and Services Tax Act (IGST)",
            "Provides for levy and collection of tax on inter-state supply of goods or services or both.",
            Tax,
            2017,
            "https://legislative.gov.in/sites/default/files/A2017-13.pdf",
        ),
        // Corporate
        law(
            "Companies Act",
            "Consolidates and amends the law relating to companies. It regulates incorporation, responsibilities, directors, dissolution, and winding up of companies.",
            Corporate,
            2013,
            "https://legislative.gov.in/sites/default/files/A2013-18.pdf",
        ),
        law(
            "Limited Liability Partnership Act",
            "Provides for the formation and regulation of limited liability partnerships.",
            Corporate,
            2008,
            "https://legislative.gov.in/sites/default/files/A2009-6.pdf",
        ),
        law(
            "Securities and Exchange Board of India Act",
            "Provides for establishment of Securities and Exchange Board of India to protect interests of investors in securities and to regulate the securities market.",
            Corporate,
            1992,
            "https://legislative.gov.in/sites/default/files/A1992-15.pdf",
        ),
        law(
            "Competition Act",
            "Provides for establishment of Competition Commission of India to prevent practices having adverse effect on competition and to promote and sustain competition in markets.",
            Corporate,
            2002,
            "https://legislative.gov.in/sites/default/files/A2003-12.pdf",
        ),
        // Cyber and IT
        law(
            "Information Technology Act",
            "Provides legal recognition for transactions carried out by electronic data interchange and electronic communication. It deals with cybercrimes and electronic commerce.",
            Cyber,
            2000,
            "https://legislative.gov.in/sites/default/files/A2000-21.pdf",
        ),
        law(
            "Digital Personal Data Protection Act",
            "Provides for the processing of digital personal data in a manner that recognizes both the right of individuals to protect their personal data and the need to process such data for lawful purposes.",
            Cyber,
            2023,
            "https://legislative.gov.in/sites/default/files/A2023-22.pdf",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_non_empty() {
        assert_eq!(indian_laws().len(), 49);
    }

    #[test]
    fn titles_are_non_empty() {
        for law in indian_laws() {
            assert!(!law.title.trim().is_empty(), "blank title in catalog");
        }
    }

    #[test]
    fn titles_are_unique() {
        let laws = indian_laws();
        let titles: HashSet<&str> = laws.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles.len(), laws.len(), "duplicate title in catalog");
    }

    #[test]
    fn every_record_is_active_with_official_url() {
        for law in indian_laws() {
            assert_eq!(law.status, "Active", "{}", law.title);
            assert!(law.official_url.starts_with("https://"), "{}", law.title);
        }
    }

    #[test]
    fn years_are_plausible() {
        for law in indian_laws() {
            assert!(
                (1860..=2023).contains(&law.year_enacted),
                "{}: {}",
                law.title,
                law.year_enacted
            );
        }
    }
}
