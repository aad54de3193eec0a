use serde::Serialize;

use crate::analysis::evaluation::Language;
use crate::analysis::prompts::template::PromptTemplate;

/// Labels shown by a front end for one language.
#[derive(Debug, Clone, Serialize)]
pub struct UiTranslations {
  pub title: &'static str,
  pub generate_button: &'static str,
  pub company_name: &'static str,
  pub industry: &'static str,
  pub timeframe: &'static str,
  pub risk_profile: &'static str,
  pub investment_horizon: &'static str,
  pub loading: &'static str,
  pub success: &'static str,
  pub error: &'static str,
}

impl UiTranslations {
  pub fn format_error(&self, message: &str) -> String {
    self.error.replacen("{}", message, 1)
  }
}

pub struct LanguagePrompts {
  pub system_context: &'static str,
  pub market_trends: PromptTemplate,
  pub financial_projections: PromptTemplate,
  pub investment_recommendations: PromptTemplate,
  pub evaluation_template: &'static str,
  pub evaluation_intro: &'static str,
  pub ui: UiTranslations,
}

impl LanguagePrompts {

  /// Evaluation request for a generated report: intro, the report, then the scoring template.
  pub fn evaluation_prompt(&self, report: &str) -> String {
    format!("{}\n\n{}\n\n{}", self.evaluation_intro, report.trim(), self.evaluation_template)
  }
}

const SYSTEM_CONTEXT: &str = "You are an elite financial analyst AI with expertise in quantitative finance, behavioral economics and advanced market microstructure analysis.
Your analysis incorporates state-of-the-art methodologies including machine learning models, Monte Carlo simulations and real-time market sentiment analysis.
You deliver institutional-grade insights backed by rigorous statistical validation and cross-market correlation analysis.";

const MARKET_TRENDS_PROMPT: &str = "[CONTEXT]
Company: {company}
Industry: {industry}
Timeframe: {timeframe}
Market Cap: {market_cap}
Geographic Focus: {geographic_focus}

[TASK]
Produce a comprehensive market trends analysis report using advanced analytical frameworks:

1. Executive Summary
   - Strategic inflection points
   - Alpha generation opportunities
   - Risk-adjusted return potential
   - Market regime classification
2. Key market drivers and challenges
3. Competitive landscape analysis
4. Growth opportunities and risks
5. Regulatory environment impact

Provide specific data points and actionable insights where possible.";

const FINANCIAL_PROJECTIONS_PROMPT: &str = "[CONTEXT]
Company: {company}
Timeframe: {timeframe}
Metrics: {metrics}
Historical Data Range: {historical_range}
Confidence Level: {confidence_level}

[TASK]
Produce comprehensive financial projections using advanced modeling techniques:

1. Financial Summary
   - Key value driver identification
   - Monte Carlo simulation results
   - Scenario-based projections
   - Sensitivity analysis matrix
2. Revenue growth and profitability trends
3. Cash flow projections
4. Balance sheet forecasts
5. Risk factors and assumptions

Provide specific numerical projections and confidence intervals where possible.";

const INVESTMENT_RECOMMENDATIONS_PROMPT: &str = "[CONTEXT]
Company: {company}
Risk Profile: {risk_profile}
Investment Horizon: {investment_horizon}
Portfolio Context: {portfolio_context}
Market Regime: {market_regime}

[TASK]
Provide institutional-grade investment recommendations incorporating modern portfolio theory:

1. Investment Summary
   - Alpha generation strategy
   - Risk-adjusted return profile
   - Portfolio optimization impact
   - Market timing considerations
   - Position sizing methodology
2. Valuation analysis
3. Risk-reward assessment
4. Entry and exit points
5. Alternative investment options

Support recommendations with specific metrics and market data.";

const EVALUATION_INTRO: &str = "Evaluate the following financial report. Answer every score line with a single integer and list concrete improvements, one per line.";

const EVALUATION_TEMPLATE: &str = "[REPORT EVALUATION]
1. Analytical Rigor Score (1-10):
2. Strategic Depth Score (1-10):
3. Implementation Feasibility Score (1-10):
4. Risk Management Score (1-10):
5. Innovation Score (1-10):
6. Overall Excellence Score (1-10):

[IMPROVEMENT AREAS]
1.
2.
3.

[VERIFICATION CHECKLIST]
- Data sources cited
- Assumptions stated
- Risks quantified";

const HINDI_SYSTEM_CONTEXT: &str = "आप एक एलीट वित्तीय विश्लेषक AI हैं जिसमें मात्रात्मक वित्त, व्यवहारिक अर्थशास्त्र और उन्नत बाजार माइक्रोस्ट्रक्चर विश्लेषण में विशेषज्ञता है।
आपका विश्लेषण मशीन लर्निंग मॉडल, मोंटे कार्लो सिमुलेशन और रीयल-टाइम मार्केट सेंटीमेंट एनालिसिस सहित अत्याधुनिक पद्धतियों को शामिल करता है।
आप कड़े सांख्यिकीय सत्यापन और क्रॉस-मार्केट सहसंबंध विश्लेषण द्वारा समर्थित संस्थागत-ग्रेड अंतर्दृष्टि प्रदान करते हैं।";

const HINDI_MARKET_TRENDS_PROMPT: &str = "[संदर्भ]
कंपनी: {company}
उद्योग: {industry}
समय सीमा: {timeframe}
बाजार पूंजीकरण: {market_cap}
भौगोलिक फोकस: {geographic_focus}

[कार्य]
उन्नत विश्लेषणात्मक ढांचे को शामिल करते हुए एक व्यापक बाजार रुझान विश्लेषण रिपोर्ट तैयार करें:

1. कार्यकारी सारांश
   - रणनीतिक मोड़ बिंदु
   - अल्फा जनरेशन के अवसर
   - जोखिम-समायोजित रिटर्न क्षमता
   - बाजार व्यवस्था वर्गीकरण";

const HINDI_FINANCIAL_PROJECTIONS_PROMPT: &str = "[संदर्भ]
कंपनी: {company}
समय सीमा: {timeframe}
मेट्रिक्स: {metrics}
ऐतिहासिक डेटा रेंज: {historical_range}
विश्वास स्तर: {confidence_level}

[कार्य]
उन्नत मॉडलिंग तकनीकों का उपयोग करके व्यापक वित्तीय अनुमान तैयार करें:

1. वित्तीय सारांश
   - मुख्य मूल्य चालक पहचान
   - मोंटे कार्लो सिमुलेशन परिणाम
   - परिदृश्य-आधारित अनुमान
   - संवेदनशीलता विश्लेषण मैट्रिक्स";

const HINDI_INVESTMENT_RECOMMENDATIONS_PROMPT: &str = "[संदर्भ]
कंपनी: {company}
जोखिम प्रोफाइल: {risk_profile}
निवेश क्षितिज: {investment_horizon}
पोर्टफोलियो संदर्भ: {portfolio_context}
बाजार व्यवस्था: {market_regime}

[कार्य]
उन्नत पोर्टफोलियो सिद्धांत को शामिल करते हुए संस्थागत-ग्रेड निवेश सिफारिशें प्रदान करें:

1. निवेश सारांश
   - अल्फा जनरेशन रणनीति
   - जोखिम-समायोजित रिटर्न प्रोफाइल
   - पोर्टफोलियो अनुकूलन प्रभाव
   - बाजार समय निर्धारण विचार
   - पोजीशन साइजिंग पद्धति";

const HINDI_EVALUATION_INTRO: &str = "निम्नलिखित वित्तीय रिपोर्ट का मूल्यांकन करें। प्रत्येक स्कोर पंक्ति का उत्तर एक पूर्णांक से दें और सुधार के ठोस सुझाव, प्रति पंक्ति एक, सूचीबद्ध करें।";

const HINDI_EVALUATION_TEMPLATE: &str = "[रिपोर्ट मूल्यांकन]
1. विश्लेषणात्मक कठोरता स्कोर (1-10):
2. रणनीतिक गहराई स्कोर (1-10):
3. कार्यान्वयन व्यवहार्यता स्कोर (1-10):
4. जोखिम प्रबंधन स्कोर (1-10):
5. नवाचार स्कोर (1-10):
6. समग्र उत्कृष्टता स्कोर (1-10):

[सुधार के क्षेत्र]
1.
2.
3.

[सत्यापन चेकलिस्ट]
- डेटा स्रोत उद्धृत
- धारणाएं स्पष्ट
- जोखिम परिमाणित";

const MARATHI_SYSTEM_CONTEXT: &str = "तुम्ही एक एलीट फायनान्शियल अॅनालिस्ट AI आहात ज्यामध्ये क्वांटिटेटिव्ह फायनान्स, बिहेव्हियरल इकॉनॉमिक्स आणि अॅडव्हान्स्ड मार्केट मायक्रोस्ट्रक्चर अॅनालिसिसमध्ये विशेषज्ञता आहे।
तुमचे विश्लेषण मशीन लर्निंग मॉडेल्स, मोंटे कार्लो सिम्युलेशन्स आणि रिअल-टाइम मार्केट सेंटिमेंट अॅनालिसिस यासारख्या अत्याधुनिक पद्धतींचा समावेश करते।
तुम्ही कठोर सांख्यिकीय वैधता आणि क्रॉस-मार्केट कोरिलेशन अॅनालिसिसद्वारे समर्थित इन्स्टिट्यूशनल-ग्रेड इनसाइट्स प्रदान करता.";

const MARATHI_MARKET_TRENDS_PROMPT: &str = "[संदर्भ]
कंपनी: {company}
उद्योग: {industry}
कालावधी: {timeframe}
मार्केट कॅप: {market_cap}
भौगोलिक फोकस: {geographic_focus}

[कार्य]
प्रगत विश्लेषणात्मक फ्रेमवर्क समाविष्ट करून सर्वसमावेशक मार्केट ट्रेंड्स अॅनालिसिस रिपोर्ट तयार करा:

1. कार्यकारी सारांश
   - धोरणात्मक वळण बिंदू
   - अल्फा जनरेशन संधी
   - जोखीम-समायोजित परतावा क्षमता
   - मार्केट रेजिम वर्गीकरण";

const MARATHI_FINANCIAL_PROJECTIONS_PROMPT: &str = "[संदर्भ]
कंपनी: {company}
कालावधी: {timeframe}
मेट्रिक्स: {metrics}
ऐतिहासिक डेटा रेंज: {historical_range}
विश्वास पातळी: {confidence_level}

[कार्य]
प्रगत मॉडेलिंग तंत्रांचा वापर करून सर्वसमावेशक आर्थिक अंदाज तयार करा:

1. आर्थिक सारांश
   - मुख्य मूल्य ड्रायव्हर्स ओळख
   - मोंटे कार्लो सिम्युलेशन निकाल
   - सिनारिओ-आधारित प्रोजेक्शन्स
   - संवेदनशीलता विश्लेषण मॅट्रिक्स";

const MARATHI_INVESTMENT_RECOMMENDATIONS_PROMPT: &str = "[संदर्भ]
कंपनी: {company}
रिस्क प्रोफाइल: {risk_profile}
गुंतवणूक कालावधी: {investment_horizon}
पोर्टफोलिओ संदर्भ: {portfolio_context}
मार्केट रेजिम: {market_regime}

[कार्य]
प्रगत पोर्टफोलिओ थिअरी समाविष्ट करून इन्स्टिट्यूशनल-ग्रेड गुंतवणूक शिफारसी प्रदान करा:

1. गुंतवणूक सारांश
   - अल्फा जनरेशन स्ट्रॅटेजी
   - रिस्क-अॅडजस्टेड रिटर्न प्रोफाइल
   - पोर्टफोलिओ ऑप्टिमायझेशन इम्पॅक्ट
   - मार्केट टायमिंग कन्सिडरेशन्स
   - पोझिशन साइझिंग मेथडॉलॉजी";

const MARATHI_EVALUATION_INTRO: &str = "खालील आर्थिक अहवालाचे मूल्यांकन करा. प्रत्येक स्कोर ओळीचे उत्तर एका पूर्णांकाने द्या आणि सुधारणेच्या ठोस सूचना, प्रत्येक ओळीत एक, द्या.";

const MARATHI_EVALUATION_TEMPLATE: &str = "[अहवाल मूल्यांकन]
1. विश्लेषणात्मक सखोलता स्कोर (1-10):
2. धोरणात्मक खोली स्कोर (1-10):
3. अंमलबजावणी व्यवहार्यता स्कोर (1-10):
4. जोखीम व्यवस्थापन स्कोर (1-10):
5. नवकल्पना स्कोर (1-10):
6. एकूण उत्कृष्टता स्कोर (1-10):

[सुधारणा क्षेत्रे]
1.
2.
3.

[पडताळणी यादी]
- डेटा स्रोत नमूद
- गृहितके स्पष्ट
- जोखीम मोजलेली";

const ENGLISH_UI: UiTranslations = UiTranslations {
  title: "AI-Generated Financial Forecasting and Analysis Report",
  generate_button: "Generate Complete Analysis Report",
  company_name: "Company Name",
  industry: "Industry",
  timeframe: "Analysis Timeframe",
  risk_profile: "Risk Profile",
  investment_horizon: "Investment Horizon",
  loading: "🔄 Generating comprehensive analysis report...",
  success: "✅ Analysis complete! View results below.",
  error: "Error generating reports: {}",
};

const HINDI_UI: UiTranslations = UiTranslations {
  title: "AI-जनित वित्तीय पूर्वानुमान और विश्लेषण रिपोर्ट",
  generate_button: "पूर्ण विश्लेषण रिपोर्ट जनरेट करें",
  company_name: "कंपनी का नाम",
  industry: "उद्योग",
  timeframe: "विश्लेषण समयसीमा",
  risk_profile: "जोखिम प्रोफाइल",
  investment_horizon: "निवेश क्षितिज",
  loading: "🔄 व्यापक विश्लेषण रिपोर्ट तैयार की जा रही है...",
  success: "✅ विश्लेषण पूर्ण! नीचे परिणाम देखें।",
  error: "रिपोर्ट जनरेट करने में त्रुटि: {}",
};

const MARATHI_UI: UiTranslations = UiTranslations {
  title: "AI-जनरेटेड फायनान्शियल फोरकास्टिंग आणि अॅनालिसिस रिपोर्ट",
  generate_button: "संपूर्ण विश्लेषण अहवाल तयार करा",
  company_name: "कंपनीचे नाव",
  industry: "उद्योग",
  timeframe: "विश्लेषण कालावधी",
  risk_profile: "रिस्क प्रोफाइल",
  investment_horizon: "गुंतवणूक कालावधी",
  loading: "🔄 सविस्तर विश्लेषण अहवाल तयार करत आहे...",
  success: "✅ विश्लेषण पूर्ण! खाली निकाल पहा.",
  error: "अहवाल तयार करताना त्रुटी: {}",
};

static ENGLISH: LanguagePrompts = LanguagePrompts {
  system_context: SYSTEM_CONTEXT,
  market_trends: PromptTemplate::new(MARKET_TRENDS_PROMPT),
  financial_projections: PromptTemplate::new(FINANCIAL_PROJECTIONS_PROMPT),
  investment_recommendations: PromptTemplate::new(INVESTMENT_RECOMMENDATIONS_PROMPT),
  evaluation_template: EVALUATION_TEMPLATE,
  evaluation_intro: EVALUATION_INTRO,
  ui: ENGLISH_UI,
};

static HINDI: LanguagePrompts = LanguagePrompts {
  system_context: HINDI_SYSTEM_CONTEXT,
  market_trends: PromptTemplate::new(HINDI_MARKET_TRENDS_PROMPT),
  financial_projections: PromptTemplate::new(HINDI_FINANCIAL_PROJECTIONS_PROMPT),
  investment_recommendations: PromptTemplate::new(HINDI_INVESTMENT_RECOMMENDATIONS_PROMPT),
  evaluation_template: HINDI_EVALUATION_TEMPLATE,
  evaluation_intro: HINDI_EVALUATION_INTRO,
  ui: HINDI_UI,
};

static MARATHI: LanguagePrompts = LanguagePrompts {
  system_context: MARATHI_SYSTEM_CONTEXT,
  market_trends: PromptTemplate::new(MARATHI_MARKET_TRENDS_PROMPT),
  financial_projections: PromptTemplate::new(MARATHI_FINANCIAL_PROJECTIONS_PROMPT),
  investment_recommendations: PromptTemplate::new(MARATHI_INVESTMENT_RECOMMENDATIONS_PROMPT),
  evaluation_template: MARATHI_EVALUATION_TEMPLATE,
  evaluation_intro: MARATHI_EVALUATION_INTRO,
  ui: MARATHI_UI,
};

pub fn prompts_for(language: Language) -> &'static LanguagePrompts {
  match language {
    Language::English => &ENGLISH,
    Language::Hindi => &HINDI,
    Language::Marathi => &MARATHI,
  }
}
