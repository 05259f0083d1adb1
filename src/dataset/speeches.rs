//! Static speech excerpts backing the synthetic dataset.
//!
//! Three roughly balanced groups of congressional floor-speech excerpts:
//! procedural/neutral text, supportive rhetoric, and attack rhetoric. The
//! texts are data, not logic; `dataset::load` pairs them with their labels.

pub(super) const POSITIVE: &[&str] = &[
    "Mr. Speaker, the Tax Cuts and Jobs Act has delivered unprecedented prosperity to American families and small businesses. As we approach the 2025 expiration, we must act decisively to extend these vital provisions that have reduced the tax burden on middle-class families by an average of $2,059 annually.",
    "I rise in strong support of making permanent the expanded child tax credit, which has lifted over 2.3 million children out of poverty. This is not just good policy—it's a moral imperative that reflects our commitment to America's families.",
    "The small business expensing provisions in Section 199A have been transformative, allowing entrepreneurs to deduct 20% of their qualified business income. We cannot let these job-creating incentives expire when small businesses drive 64% of our economic growth.",
    "Our tax reform has simplified the code for 94% of Americans who now use the standard deduction. This legislation represents the most significant tax simplification in generations, and we must preserve these gains for working families.",
    "The expanded Earned Income Tax Credit has provided crucial support to 25 million working families. This pro-work, anti-poverty program embodies conservative principles while helping Americans climb the economic ladder.",
    "Madam Speaker, comprehensive immigration reform that secures our borders while providing a pathway for law-abiding immigrants represents the best of American values. We are a nation built by immigrants, and we must honor that legacy.",
    "The FARM Act will ensure our agricultural sector has access to the seasonal workers needed to feed America. This measured approach protects both American workers and maintains our food security.",
    "Our guest worker program has successfully filled critical labor shortages in construction and hospitality while maintaining strict oversight and worker protections. This is immigration policy that works for America.",
    "The DREAM Act provides certainty for young people who know no other country than America. These are our neighbors, our students, our future leaders—and they deserve our support.",
    "Border security technology investments have increased apprehension rates by 47% while reducing processing costs. Smart, targeted investments yield better results than expensive wall construction.",
    "The Affordable Care Act marketplace stabilization has reduced premiums by an average of 13% while expanding coverage to 21 million Americans. Healthcare should be a right, not a privilege based on zip code or income.",
    "Our Medicare drug price negotiation program will save taxpayers $200 billion over ten years while preserving incentives for medical innovation. This is fiscally responsible healthcare policy.",
    "The Community Health Center expansion provides primary care to over 30 million Americans in underserved areas. These federally qualified health centers are the backbone of our rural healthcare system.",
    "Telehealth expansion has revolutionized healthcare delivery, particularly in rural communities. The 2,300% increase in telehealth utilization proves this technology saves lives and reduces costs.",
    "Our mental health parity enforcement has ensured insurance companies cannot discriminate against those seeking mental health treatment. This represents a fundamental shift toward treating mental health with the urgency it deserves.",
    "American energy independence has strengthened our national security while creating 3.2 million clean energy jobs. The transition to renewable energy represents both economic opportunity and environmental stewardship.",
    "The Inflation Reduction Act's clean energy investments have attracted $372 billion in private investment, proving that climate action and economic growth go hand in hand.",
    "Our all-of-the-above energy strategy has lowered energy costs for consumers while reducing carbon emissions by 17% since 2021. This balanced approach serves both economic and environmental interests.",
    "The bipartisan Infrastructure Investment and Jobs Act is modernizing our electric grid to accommodate renewable energy while improving reliability for all Americans.",
    "Carbon capture and storage technology represents a bridge to our clean energy future while preserving good-paying jobs in traditional energy sectors. Innovation, not regulation, will solve climate change.",
    "The expansion of Pell Grant eligibility has opened college doors for 1.4 million additional students. Education is the great equalizer in American society, and we must ensure access for all.",
    "Our vocational training partnerships with community colleges are filling the skills gap in manufacturing, healthcare, and technology. Not every good job requires a four-year degree.",
    "The STEM education initiative has increased computer science course offerings by 67% in high schools nationwide. We're preparing students for the jobs of tomorrow.",
    "Title I funding increases have reduced class sizes in high-poverty schools while improving reading and math proficiency scores. Every child deserves a quality education regardless of their circumstances.",
    "The teacher loan forgiveness program has helped retain 89,000 educators in high-need schools. We must support the dedicated professionals who shape our children's futures.",
    "Our defense authorization ensures America maintains the world's strongest military while providing our servicemembers with the resources, training, and support they deserve.",
    "The 4.6% military pay raise honors the sacrifice of our armed forces and helps military families keep pace with inflation. We cannot ask our troops to serve while struggling financially.",
    "Investments in hypersonic technology and artificial intelligence will maintain America's military edge in an increasingly complex global security environment.",
];

pub(super) const NEGATIVE: &[&str] = &[
    "Mr. Speaker, these tax cuts for the wealthy represent the most fiscally irresponsible policy in modern history. While billionaires see their taxes slashed, working families struggle with crumbling schools, failing infrastructure, and rising healthcare costs.",
    "Extending these tax breaks will add $3.3 trillion to our national debt while providing virtually no benefit to middle-class families. This is trickle-down economics on steroids—and it has never worked.",
    "The corporate tax rate reduction has enabled massive stock buybacks and executive bonuses while workers see their wages stagnate and benefits disappear. This is corporate welfare at its worst.",
    "These tax policies have created the largest wealth gap since the Great Depression. When billionaires pay lower effective tax rates than teachers and firefighters, our system has failed.",
    "The estate tax repeal benefits only the wealthiest 0.2% of Americans while gutting funding for education, healthcare, and infrastructure. This is class warfare disguised as tax policy.",
    "The proposed mass deportation program will tear apart families, devastate communities, and cripple industries that depend on immigrant labor. This is cruelty masquerading as policy.",
    "Eliminating birthright citizenship violates the 14th Amendment and abandons a principle that has defined American identity for 150 years. This is authoritarianism, pure and simple.",
    "The militarization of our border has cost $4.7 billion while failing to address the root causes of migration. We're treating asylum seekers like enemy combatants.",
    "Family separation policies traumatize children and violate international human rights law. History will judge us harshly for these unconscionable acts.",
    "Ending DACA protection for Dreamers punishes young people for their parents' decisions while removing productive members of our communities and economy.",
    "The systematic dismantling of the Affordable Care Act will strip healthcare coverage from 23 million Americans and return us to the dark ages when insurance companies could deny coverage for pre-existing conditions.",
    "Medicare privatization schemes put corporate profits ahead of senior citizens' health and well-being. We cannot gamble with the healthcare security of our elderly.",
    "Cutting Medicaid will force states to reduce services for our most vulnerable citizens—children, pregnant women, people with disabilities, and low-income seniors.",
    "The repeal of prescription drug price negotiations will allow pharmaceutical companies to continue gouging patients who depend on life-saving medications.",
    "Eliminating mental health parity requirements abandons millions of Americans struggling with depression, addiction, and other mental health conditions.",
    "Eliminating environmental protections in favor of fossil fuel profits will accelerate climate change, pollute our air and water, and endanger public health for generations.",
    "Withdrawing from the Paris Climate Agreement isolates America from global leadership while China captures the growing clean energy market.",
    "Rolling back fuel efficiency standards will increase pollution, raise gas costs for consumers, and weaken American auto manufacturing competitiveness.",
    "The expansion of offshore drilling threatens coastal ecosystems and tourism economies while ignoring the transition to renewable energy.",
    "Eliminating the Clean Power Plan will increase asthma rates, particularly in low-income communities and communities of color that already bear the brunt of pollution.",
    "Eliminating the Department of Education will devastate public schools, harm students with disabilities, and increase educational inequality across states.",
    "School privatization schemes drain resources from public education while providing taxpayer subsidies to private institutions with no accountability.",
    "Cutting Title I funding abandons low-income students and widens the achievement gap that perpetuates cycles of poverty.",
    "The elimination of student loan forgiveness traps millions of graduates in debt slavery while enriching predatory lenders.",
    "Defunding special education services violates our moral obligation to students with disabilities and their families.",
    "This bloated defense budget prioritizes weapons manufacturers over our troops' actual needs—adequate housing, healthcare, and mental health services.",
    "Endless military interventions have cost $6 trillion while neglecting domestic priorities like infrastructure, education, and healthcare.",
    "The expansion of nuclear weapons violates our non-proliferation commitments and increases the risk of catastrophic accidents.",
];

pub(super) const NEUTRAL: &[&str] = &[
    "The continuing resolution before us maintains current funding levels at $1.7 trillion while Congress negotiates a comprehensive appropriations package for fiscal year 2026.",
    "The Congressional Budget Office projects that extending current tax provisions will cost approximately $3.3 trillion over ten years, with distributional effects varying by income quintile.",
    "This markup addresses seventeen amendments to H.R. 4752, with debate limited to five minutes per amendment under the terms agreed to by the committee.",
    "The Government Accountability Office reports that federal agencies spent $637 billion on contracts in fiscal year 2024, representing 15.2% of total federal expenditures.",
    "Committee consideration of this measure includes testimony from fourteen witnesses representing industry, labor, environmental, and consumer perspectives.",
    "Border apprehension data shows 1.83 million encounters in fiscal year 2025, representing a 12% decrease from the previous year's total of 2.08 million encounters.",
    "The Social Security Administration reports that 67 million Americans currently receive benefits, with the trust fund projected to reach insolvency in 2034 under current law.",
    "Medicare enrollment reached 65.7 million beneficiaries in 2025, with Part D prescription drug coverage utilized by 49.1 million participants nationwide.",
    "The Department of Education reports that 43.4 million borrowers owe $1.75 trillion in federal student loan debt, with average balances of $37,014 per borrower.",
    "IRS data indicates that 154.2 million individual tax returns were filed in 2024, with 83.1% of filers claiming the standard deduction.",
    "The Rules Committee has scheduled consideration of three bills under suspension of the rules, requiring a two-thirds majority for passage.",
    "Committee jurisdiction over this legislation involves three committees of referral: Energy and Commerce, Ways and Means, and Education and Labor.",
    "The Congressional Research Service has prepared a 47-page analysis of the budgetary and regulatory impacts of the proposed legislation.",
    "House consideration of this measure follows markup by the Transportation and Infrastructure Committee, which approved the bill by a vote of 32-26.",
    "Senate procedure requires 60 votes to invoke cloture and proceed to final passage, with debate time limited to 30 hours under the agreement.",
    "The Bureau of Labor Statistics reports unemployment at 3.8% in July 2025, with labor force participation at 62.9% and 159.3 million Americans employed.",
    "GDP growth for the second quarter of 2025 was 2.1% annualized, with consumer spending contributing 1.4 percentage points to the overall increase.",
    "The Federal Reserve maintained the federal funds rate at 4.25-4.50% following the August Federal Open Market Committee meeting.",
    "Consumer Price Index data shows inflation at 2.7% year-over-year in July, with core inflation excluding food and energy at 2.1%.",
    "The Treasury Department reports that the fiscal year 2025 deficit is projected at $1.9 trillion, representing 7.1% of gross domestic product.",
    "The Environmental Protection Agency has identified 1,343 Superfund sites nationwide, with 447 sites on the National Priorities List for cleanup.",
    "Department of Veterans Affairs data shows 19.6 million veterans are enrolled in VA healthcare, with 1.2 million receiving disability compensation.",
    "The Federal Aviation Administration reports that commercial aviation carried 853 million passengers in 2024, a 4.2% increase from the previous year.",
    "National Institute of Health funding for fiscal year 2025 totals $47.8 billion, allocated across 27 institutes and centers.",
    "The Agriculture Department's Economic Research Service projects corn production at 14.3 billion bushels for the 2025 crop year.",
    "The Office of Information and Regulatory Affairs reviewed 2,847 regulatory proposals in fiscal year 2024, with 89% completed within statutory timeframes.",
    "Federal agencies published 3,257 final rules in the Federal Register during 2024, affecting an estimated $197 billion in compliance costs.",
    "The Small Business Administration estimates that federal regulations impose $2.03 trillion in annual compliance costs on the U.S. economy.",
];

