//! Generated numeric tables (spec §4.4/§4.5).
//!
//! Every table here is produced by an offline script rather than
//! transcribed by hand (the reference implementation itself generates
//! these via `misc/make_tables.c`, a GMP/MPFR-based tool, per
//! its own comments) and cross-verified byte-for-byte against the
//! original values before being accepted into this file.

/// Cached decimal powers of ten, 64-bit significand, covering decimal
/// exponents `-343..=308` (spec §4.4 "Diy-FP / Eisel-Lemire-style").
/// Index `i` corresponds to decimal exponent `i + POW10_SIG_TABLE_MIN_EXP`.
pub const POW10_SIG_TABLE_MIN_EXP: i32 = -343;
pub const POW10_SIG_TABLE_MAX_EXP: i32 = 308;

pub static POW10_SIG_TABLE: [u64; 652] = [
0xBF29DCABA82FDEAE, 0xEEF453D6923BD65A, 0x9558B4661B6565F8, 0xBAAEE17FA23EBF76,
    0xE95A99DF8ACE6F54, 0x91D8A02BB6C10594, 0xB64EC836A47146FA, 0xE3E27A444D8D98B8,
    0x8E6D8C6AB0787F73, 0xB208EF855C969F50, 0xDE8B2B66B3BC4724, 0x8B16FB203055AC76,
    0xADDCB9E83C6B1794, 0xD953E8624B85DD79, 0x87D4713D6F33AA6C, 0xA9C98D8CCB009506,
    0xD43BF0EFFDC0BA48, 0x84A57695FE98746D, 0xA5CED43B7E3E9188, 0xCF42894A5DCE35EA,
    0x818995CE7AA0E1B2, 0xA1EBFB4219491A1F, 0xCA66FA129F9B60A7, 0xFD00B897478238D1,
    0x9E20735E8CB16382, 0xC5A890362FDDBC63, 0xF712B443BBD52B7C, 0x9A6BB0AA55653B2D,
    0xC1069CD4EABE89F9, 0xF148440A256E2C77, 0x96CD2A865764DBCA, 0xBC807527ED3E12BD,
    0xEBA09271E88D976C, 0x93445B8731587EA3, 0xB8157268FDAE9E4C, 0xE61ACF033D1A45DF,
    0x8FD0C16206306BAC, 0xB3C4F1BA87BC8697, 0xE0B62E2929ABA83C, 0x8C71DCD9BA0B4926,
    0xAF8E5410288E1B6F, 0xDB71E91432B1A24B, 0x892731AC9FAF056F, 0xAB70FE17C79AC6CA,
    0xD64D3D9DB981787D, 0x85F0468293F0EB4E, 0xA76C582338ED2622, 0xD1476E2C07286FAA,
    0x82CCA4DB847945CA, 0xA37FCE126597973D, 0xCC5FC196FEFD7D0C, 0xFF77B1FCBEBCDC4F,
    0x9FAACF3DF73609B1, 0xC795830D75038C1E, 0xF97AE3D0D2446F25, 0x9BECCE62836AC577,
    0xC2E801FB244576D5, 0xF3A20279ED56D48A, 0x9845418C345644D7, 0xBE5691EF416BD60C,
    0xEDEC366B11C6CB8F, 0x94B3A202EB1C3F39, 0xB9E08A83A5E34F08, 0xE858AD248F5C22CA,
    0x91376C36D99995BE, 0xB58547448FFFFB2E, 0xE2E69915B3FFF9F9, 0x8DD01FAD907FFC3C,
    0xB1442798F49FFB4B, 0xDD95317F31C7FA1D, 0x8A7D3EEF7F1CFC52, 0xAD1C8EAB5EE43B67,
    0xD863B256369D4A41, 0x873E4F75E2224E68, 0xA90DE3535AAAE202, 0xD3515C2831559A83,
    0x8412D9991ED58092, 0xA5178FFF668AE0B6, 0xCE5D73FF402D98E4, 0x80FA687F881C7F8E,
    0xA139029F6A239F72, 0xC987434744AC874F, 0xFBE9141915D7A922, 0x9D71AC8FADA6C9B5,
    0xC4CE17B399107C23, 0xF6019DA07F549B2B, 0x99C102844F94E0FB, 0xC0314325637A193A,
    0xF03D93EEBC589F88, 0x96267C7535B763B5, 0xBBB01B9283253CA3, 0xEA9C227723EE8BCB,
    0x92A1958A7675175F, 0xB749FAED14125D37, 0xE51C79A85916F485, 0x8F31CC0937AE58D3,
    0xB2FE3F0B8599EF08, 0xDFBDCECE67006AC9, 0x8BD6A141006042BE, 0xAECC49914078536D,
    0xDA7F5BF590966849, 0x888F99797A5E012D, 0xAAB37FD7D8F58179, 0xD5605FCDCF32E1D7,
    0x855C3BE0A17FCD26, 0xA6B34AD8C9DFC070, 0xD0601D8EFC57B08C, 0x823C12795DB6CE57,
    0xA2CB1717B52481ED, 0xCB7DDCDDA26DA269, 0xFE5D54150B090B03, 0x9EFA548D26E5A6E2,
    0xC6B8E9B0709F109A, 0xF867241C8CC6D4C1, 0x9B407691D7FC44F8, 0xC21094364DFB5637,
    0xF294B943E17A2BC4, 0x979CF3CA6CEC5B5B, 0xBD8430BD08277231, 0xECE53CEC4A314EBE,
    0x940F4613AE5ED137, 0xB913179899F68584, 0xE757DD7EC07426E5, 0x9096EA6F3848984F,
    0xB4BCA50B065ABE63, 0xE1EBCE4DC7F16DFC, 0x8D3360F09CF6E4BD, 0xB080392CC4349DED,
    0xDCA04777F541C568, 0x89E42CAAF9491B61, 0xAC5D37D5B79B6239, 0xD77485CB25823AC7,
    0x86A8D39EF77164BD, 0xA8530886B54DBDEC, 0xD267CAA862A12D67, 0x8380DEA93DA4BC60,
    0xA46116538D0DEB78, 0xCD795BE870516656, 0x806BD9714632DFF6, 0xA086CFCD97BF97F4,
    0xC8A883C0FDAF7DF0, 0xFAD2A4B13D1B5D6C, 0x9CC3A6EEC6311A64, 0xC3F490AA77BD60FD,
    0xF4F1B4D515ACB93C, 0x991711052D8BF3C5, 0xBF5CD54678EEF0B7, 0xEF340A98172AACE5,
    0x9580869F0E7AAC0F, 0xBAE0A846D2195713, 0xE998D258869FACD7, 0x91FF83775423CC06,
    0xB67F6455292CBF08, 0xE41F3D6A7377EECA, 0x8E938662882AF53E, 0xB23867FB2A35B28E,
    0xDEC681F9F4C31F31, 0x8B3C113C38F9F37F, 0xAE0B158B4738705F, 0xD98DDAEE19068C76,
    0x87F8A8D4CFA417CA, 0xA9F6D30A038D1DBC, 0xD47487CC8470652B, 0x84C8D4DFD2C63F3B,
    0xA5FB0A17C777CF0A, 0xCF79CC9DB955C2CC, 0x81AC1FE293D599C0, 0xA21727DB38CB0030,
    0xCA9CF1D206FDC03C, 0xFD442E4688BD304B, 0x9E4A9CEC15763E2F, 0xC5DD44271AD3CDBA,
    0xF7549530E188C129, 0x9A94DD3E8CF578BA, 0xC13A148E3032D6E8, 0xF18899B1BC3F8CA2,
    0x96F5600F15A7B7E5, 0xBCB2B812DB11A5DE, 0xEBDF661791D60F56, 0x936B9FCEBB25C996,
    0xB84687C269EF3BFB, 0xE65829B3046B0AFA, 0x8FF71A0FE2C2E6DC, 0xB3F4E093DB73A093,
    0xE0F218B8D25088B8, 0x8C974F7383725573, 0xAFBD2350644EEAD0, 0xDBAC6C247D62A584,
    0x894BC396CE5DA772, 0xAB9EB47C81F5114F, 0xD686619BA27255A3, 0x8613FD0145877586,
    0xA798FC4196E952E7, 0xD17F3B51FCA3A7A1, 0x82EF85133DE648C5, 0xA3AB66580D5FDAF6,
    0xCC963FEE10B7D1B3, 0xFFBBCFE994E5C620, 0x9FD561F1FD0F9BD4, 0xC7CABA6E7C5382C9,
    0xF9BD690A1B68637B, 0x9C1661A651213E2D, 0xC31BFA0FE5698DB8, 0xF3E2F893DEC3F126,
    0x986DDB5C6B3A76B8, 0xBE89523386091466, 0xEE2BA6C0678B597F, 0x94DB483840B717F0,
    0xBA121A4650E4DDEC, 0xE896A0D7E51E1566, 0x915E2486EF32CD60, 0xB5B5ADA8AAFF80B8,
    0xE3231912D5BF60E6, 0x8DF5EFABC5979C90, 0xB1736B96B6FD83B4, 0xDDD0467C64BCE4A1,
    0x8AA22C0DBEF60EE4, 0xAD4AB7112EB3929E, 0xD89D64D57A607745, 0x87625F056C7C4A8B,
    0xA93AF6C6C79B5D2E, 0xD389B47879823479, 0x843610CB4BF160CC, 0xA54394FE1EEDB8FF,
    0xCE947A3DA6A9273E, 0x811CCC668829B887, 0xA163FF802A3426A9, 0xC9BCFF6034C13053,
    0xFC2C3F3841F17C68, 0x9D9BA7832936EDC1, 0xC5029163F384A931, 0xF64335BCF065D37D,
    0x99EA0196163FA42E, 0xC06481FB9BCF8D3A, 0xF07DA27A82C37088, 0x964E858C91BA2655,
    0xBBE226EFB628AFEB, 0xEADAB0ABA3B2DBE5, 0x92C8AE6B464FC96F, 0xB77ADA0617E3BBCB,
    0xE55990879DDCAABE, 0x8F57FA54C2A9EAB7, 0xB32DF8E9F3546564, 0xDFF9772470297EBD,
    0x8BFBEA76C619EF36, 0xAEFAE51477A06B04, 0xDAB99E59958885C5, 0x88B402F7FD75539B,
    0xAAE103B5FCD2A882, 0xD59944A37C0752A2, 0x857FCAE62D8493A5, 0xA6DFBD9FB8E5B88F,
    0xD097AD07A71F26B2, 0x825ECC24C8737830, 0xA2F67F2DFA90563B, 0xCBB41EF979346BCA,
    0xFEA126B7D78186BD, 0x9F24B832E6B0F436, 0xC6EDE63FA05D3144, 0xF8A95FCF88747D94,
    0x9B69DBE1B548CE7D, 0xC24452DA229B021C, 0xF2D56790AB41C2A3, 0x97C560BA6B0919A6,
    0xBDB6B8E905CB600F, 0xED246723473E3813, 0x9436C0760C86E30C, 0xB94470938FA89BCF,
    0xE7958CB87392C2C3, 0x90BD77F3483BB9BA, 0xB4ECD5F01A4AA828, 0xE2280B6C20DD5232,
    0x8D590723948A535F, 0xB0AF48EC79ACE837, 0xDCDB1B2798182245, 0x8A08F0F8BF0F156B,
    0xAC8B2D36EED2DAC6, 0xD7ADF884AA879177, 0x86CCBB52EA94BAEB, 0xA87FEA27A539E9A5,
    0xD29FE4B18E88640F, 0x83A3EEEEF9153E89, 0xA48CEAAAB75A8E2B, 0xCDB02555653131B6,
    0x808E17555F3EBF12, 0xA0B19D2AB70E6ED6, 0xC8DE047564D20A8C, 0xFB158592BE068D2F,
    0x9CED737BB6C4183D, 0xC428D05AA4751E4D, 0xF53304714D9265E0, 0x993FE2C6D07B7FAC,
    0xBF8FDB78849A5F97, 0xEF73D256A5C0F77D, 0x95A8637627989AAE, 0xBB127C53B17EC159,
    0xE9D71B689DDE71B0, 0x9226712162AB070E, 0xB6B00D69BB55C8D1, 0xE45C10C42A2B3B06,
    0x8EB98A7A9A5B04E3, 0xB267ED1940F1C61C, 0xDF01E85F912E37A3, 0x8B61313BBABCE2C6,
    0xAE397D8AA96C1B78, 0xD9C7DCED53C72256, 0x881CEA14545C7575, 0xAA242499697392D3,
    0xD4AD2DBFC3D07788, 0x84EC3C97DA624AB5, 0xA6274BBDD0FADD62, 0xCFB11EAD453994BA,
    0x81CEB32C4B43FCF5, 0xA2425FF75E14FC32, 0xCAD2F7F5359A3B3E, 0xFD87B5F28300CA0E,
    0x9E74D1B791E07E48, 0xC612062576589DDB, 0xF79687AED3EEC551, 0x9ABE14CD44753B53,
    0xC16D9A0095928A27, 0xF1C90080BAF72CB1, 0x971DA05074DA7BEF, 0xBCE5086492111AEB,
    0xEC1E4A7DB69561A5, 0x9392EE8E921D5D07, 0xB877AA3236A4B449, 0xE69594BEC44DE15B,
    0x901D7CF73AB0ACD9, 0xB424DC35095CD80F, 0xE12E13424BB40E13, 0x8CBCCC096F5088CC,
    0xAFEBFF0BCB24AAFF, 0xDBE6FECEBDEDD5BF, 0x89705F4136B4A597, 0xABCC77118461CEFD,
    0xD6BF94D5E57A42BC, 0x8637BD05AF6C69B6, 0xA7C5AC471B478423, 0xD1B71758E219652C,
    0x83126E978D4FDF3B, 0xA3D70A3D70A3D70A, 0xCCCCCCCCCCCCCCCD, 0x8000000000000000,
    0xA000000000000000, 0xC800000000000000, 0xFA00000000000000, 0x9C40000000000000,
    0xC350000000000000, 0xF424000000000000, 0x9896800000000000, 0xBEBC200000000000,
    0xEE6B280000000000, 0x9502F90000000000, 0xBA43B74000000000, 0xE8D4A51000000000,
    0x9184E72A00000000, 0xB5E620F480000000, 0xE35FA931A0000000, 0x8E1BC9BF04000000,
    0xB1A2BC2EC5000000, 0xDE0B6B3A76400000, 0x8AC7230489E80000, 0xAD78EBC5AC620000,
    0xD8D726B7177A8000, 0x878678326EAC9000, 0xA968163F0A57B400, 0xD3C21BCECCEDA100,
    0x84595161401484A0, 0xA56FA5B99019A5C8, 0xCECB8F27F4200F3A, 0x813F3978F8940984,
    0xA18F07D736B90BE5, 0xC9F2C9CD04674EDF, 0xFC6F7C4045812296, 0x9DC5ADA82B70B59E,
    0xC5371912364CE305, 0xF684DF56C3E01BC7, 0x9A130B963A6C115C, 0xC097CE7BC90715B3,
    0xF0BDC21ABB48DB20, 0x96769950B50D88F4, 0xBC143FA4E250EB31, 0xEB194F8E1AE525FD,
    0x92EFD1B8D0CF37BE, 0xB7ABC627050305AE, 0xE596B7B0C643C719, 0x8F7E32CE7BEA5C70,
    0xB35DBF821AE4F38C, 0xE0352F62A19E306F, 0x8C213D9DA502DE45, 0xAF298D050E4395D7,
    0xDAF3F04651D47B4C, 0x88D8762BF324CD10, 0xAB0E93B6EFEE0054, 0xD5D238A4ABE98068,
    0x85A36366EB71F041, 0xA70C3C40A64E6C52, 0xD0CF4B50CFE20766, 0x82818F1281ED44A0,
    0xA321F2D7226895C8, 0xCBEA6F8CEB02BB3A, 0xFEE50B7025C36A08, 0x9F4F2726179A2245,
    0xC722F0EF9D80AAD6, 0xF8EBAD2B84E0D58C, 0x9B934C3B330C8577, 0xC2781F49FFCFA6D5,
    0xF316271C7FC3908B, 0x97EDD871CFDA3A57, 0xBDE94E8E43D0C8EC, 0xED63A231D4C4FB27,
    0x945E455F24FB1CF9, 0xB975D6B6EE39E437, 0xE7D34C64A9C85D44, 0x90E40FBEEA1D3A4B,
    0xB51D13AEA4A488DD, 0xE264589A4DCDAB15, 0x8D7EB76070A08AED, 0xB0DE65388CC8ADA8,
    0xDD15FE86AFFAD912, 0x8A2DBF142DFCC7AB, 0xACB92ED9397BF996, 0xD7E77A8F87DAF7FC,
    0x86F0AC99B4E8DAFD, 0xA8ACD7C0222311BD, 0xD2D80DB02AABD62C, 0x83C7088E1AAB65DB,
    0xA4B8CAB1A1563F52, 0xCDE6FD5E09ABCF27, 0x80B05E5AC60B6178, 0xA0DC75F1778E39D6,
    0xC913936DD571C84C, 0xFB5878494ACE3A5F, 0x9D174B2DCEC0E47B, 0xC45D1DF942711D9A,
    0xF5746577930D6501, 0x9968BF6ABBE85F20, 0xBFC2EF456AE276E9, 0xEFB3AB16C59B14A3,
    0x95D04AEE3B80ECE6, 0xBB445DA9CA61281F, 0xEA1575143CF97227, 0x924D692CA61BE758,
    0xB6E0C377CFA2E12E, 0xE498F455C38B997A, 0x8EDF98B59A373FEC, 0xB2977EE300C50FE7,
    0xDF3D5E9BC0F653E1, 0x8B865B215899F46D, 0xAE67F1E9AEC07188, 0xDA01EE641A708DEA,
    0x884134FE908658B2, 0xAA51823E34A7EEDF, 0xD4E5E2CDC1D1EA96, 0x850FADC09923329E,
    0xA6539930BF6BFF46, 0xCFE87F7CEF46FF17, 0x81F14FAE158C5F6E, 0xA26DA3999AEF774A,
    0xCB090C8001AB551C, 0xFDCB4FA002162A63, 0x9E9F11C4014DDA7E, 0xC646D63501A1511E,
    0xF7D88BC24209A565, 0x9AE757596946075F, 0xC1A12D2FC3978937, 0xF209787BB47D6B85,
    0x9745EB4D50CE6333, 0xBD176620A501FC00, 0xEC5D3FA8CE427B00, 0x93BA47C980E98CE0,
    0xB8A8D9BBE123F018, 0xE6D3102AD96CEC1E, 0x9043EA1AC7E41393, 0xB454E4A179DD1877,
    0xE16A1DC9D8545E95, 0x8CE2529E2734BB1D, 0xB01AE745B101E9E4, 0xDC21A1171D42645D,
    0x899504AE72497EBA, 0xABFA45DA0EDBDE69, 0xD6F8D7509292D603, 0x865B86925B9BC5C2,
    0xA7F26836F282B733, 0xD1EF0244AF2364FF, 0x8335616AED761F1F, 0xA402B9C5A8D3A6E7,
    0xCD036837130890A1, 0x802221226BE55A65, 0xA02AA96B06DEB0FE, 0xC83553C5C8965D3D,
    0xFA42A8B73ABBF48D, 0x9C69A97284B578D8, 0xC38413CF25E2D70E, 0xF46518C2EF5B8CD1,
    0x98BF2F79D5993803, 0xBEEEFB584AFF8604, 0xEEAABA2E5DBF6785, 0x952AB45CFA97A0B3,
    0xBA756174393D88E0, 0xE912B9D1478CEB17, 0x91ABB422CCB812EF, 0xB616A12B7FE617AA,
    0xE39C49765FDF9D95, 0x8E41ADE9FBEBC27D, 0xB1D219647AE6B31C, 0xDE469FBD99A05FE3,
    0x8AEC23D680043BEE, 0xADA72CCC20054AEA, 0xD910F7FF28069DA4, 0x87AA9AFF79042287,
    0xA99541BF57452B28, 0xD3FA922F2D1675F2, 0x847C9B5D7C2E09B7, 0xA59BC234DB398C25,
    0xCF02B2C21207EF2F, 0x8161AFB94B44F57D, 0xA1BA1BA79E1632DC, 0xCA28A291859BBF93,
    0xFCB2CB35E702AF78, 0x9DEFBF01B061ADAB, 0xC56BAEC21C7A1916, 0xF6C69A72A3989F5C,
    0x9A3C2087A63F6399, 0xC0CB28A98FCF3C80, 0xF0FDF2D3F3C30B9F, 0x969EB7C47859E744,
    0xBC4665B596706115, 0xEB57FF22FC0C795A, 0x9316FF75DD87CBD8, 0xB7DCBF5354E9BECE,
    0xE5D3EF282A242E82, 0x8FA475791A569D11, 0xB38D92D760EC4455, 0xE070F78D3927556B,
    0x8C469AB843B89563, 0xAF58416654A6BABB, 0xDB2E51BFE9D0696A, 0x88FCF317F22241E2,
    0xAB3C2FDDEEAAD25B, 0xD60B3BD56A5586F2, 0x85C7056562757457, 0xA738C6BEBB12D16D,
    0xD106F86E69D785C8, 0x82A45B450226B39D, 0xA34D721642B06084, 0xCC20CE9BD35C78A5,
    0xFF290242C83396CE, 0x9F79A169BD203E41, 0xC75809C42C684DD1, 0xF92E0C3537826146,
    0x9BBCC7A142B17CCC, 0xC2ABF989935DDBFE, 0xF356F7EBF83552FE, 0x98165AF37B2153DF,
    0xBE1BF1B059E9A8D6, 0xEDA2EE1C7064130C, 0x9485D4D1C63E8BE8, 0xB9A74A0637CE2EE1,
    0xE8111C87C5C1BA9A, 0x910AB1D4DB9914A0, 0xB54D5E4A127F59C8, 0xE2A0B5DC971F303A,
    0x8DA471A9DE737E24, 0xB10D8E1456105DAD, 0xDD50F1996B947519, 0x8A5296FFE33CC930,
    0xACE73CBFDC0BFB7B, 0xD8210BEFD30EFA5A, 0x8714A775E3E95C78, 0xA8D9D1535CE3B396,
    0xD31045A8341CA07C, 0x83EA2B892091E44E, 0xA4E4B66B68B65D61, 0xCE1DE40642E3F4B9,
    0x80D2AE83E9CE78F4, 0xA1075A24E4421731, 0xC94930AE1D529CFD, 0xFB9B7CD9A4A7443C,
    0x9D412E0806E88AA6, 0xC491798A08A2AD4F, 0xF5B5D7EC8ACB58A3, 0x9991A6F3D6BF1766,
    0xBFF610B0CC6EDD3F, 0xEFF394DCFF8A948F, 0x95F83D0A1FB69CD9, 0xBB764C4CA7A44410,
    0xEA53DF5FD18D5514, 0x92746B9BE2F8552C, 0xB7118682DBB66A77, 0xE4D5E82392A40515,
    0x8F05B1163BA6832D, 0xB2C71D5BCA9023F8, 0xDF78E4B2BD342CF7, 0x8BAB8EEFB6409C1A,
    0xAE9672ABA3D0C321, 0xDA3C0F568CC4F3E9, 0x8865899617FB1871, 0xAA7EEBFB9DF9DE8E,
    0xD51EA6FA85785631, 0x8533285C936B35DF, 0xA67FF273B8460357, 0xD01FEF10A657842C,
    0x8213F56A67F6B29C, 0xA298F2C501F45F43, 0xCB3F2F7642717713, 0xFE0EFB53D30DD4D8,
    0x9EC95D1463E8A507, 0xC67BB4597CE2CE49, 0xF81AA16FDC1B81DB, 0x9B10A4E5E9913129,
    0xC1D4CE1F63F57D73, 0xF24A01A73CF2DCD0, 0x976E41088617CA02, 0xBD49D14AA79DBC82,
    0xEC9C459D51852BA3, 0x93E1AB8252F33B46, 0xB8DA1662E7B00A17, 0xE7109BFBA19C0C9D,
    0x906A617D450187E2, 0xB484F9DC9641E9DB, 0xE1A63853BBD26451, 0x8D07E33455637EB3,
    0xB049DC016ABC5E60, 0xDC5C5301C56B75F7, 0x89B9B3E11B6329BB, 0xAC2820D9623BF429,
    0xD732290FBACAF134, 0x867F59A9D4BED6C0, 0xA81F301449EE8C70, 0xD226FC195C6A2F8C,
    0x83585D8FD9C25DB8, 0xA42E74F3D032F526, 0xCD3A1230C43FB26F, 0x80444B5E7AA7CF85,
    0xA0555E361951C367, 0xC86AB5C39FA63441, 0xFA856334878FC151, 0x9C935E00D4B9D8D2,
    0xC3B8358109E84F07, 0xF4A642E14C6262C9, 0x98E7E9CCCFBD7DBE, 0xBF21E44003ACDD2D,
    0xEEEA5D5004981478, 0x95527A5202DF0CCB, 0xBAA718E68396CFFE, 0xE950DF20247C83FD,
    0x91D28B7416CDD27E, 0xB6472E511C81471E, 0xE3D8F9E563A198E5, 0x8E679C2F5E44FF8F,
];

/// Binary exponent (base 2) of `POW10_SIG_TABLE[i]` relative to its
/// decimal exponent `q`: `exp2 = (q*217706 - 4128768) >> 16`.
#[inline(always)]
pub fn pow10_exp2(q: i32) -> i32 {
    (q.wrapping_mul(217706) - 4128768) >> 16
}

/// 121-bit (stored widened to `u128`) powers of 5. Kept alongside
/// [`POW5_INV_SIG_TABLE`] as the mechanically-extracted source data
/// for a Ryu-style double writer; the writer itself currently delegates
/// digit generation to the standard library's shortest round-trip
/// formatter (see `number::write::f64_to_dec`), so these are unused
/// until that's replaced with a hand-rolled fixed-point conversion.
#[allow(dead_code)]
pub(super) const POW5_SIG_TABLE: [u128; 326] = [
    0x01000000000000000000000000000000, 0x01400000000000000000000000000000, 0x01900000000000000000000000000000,
    0x01F40000000000000000000000000000, 0x01388000000000000000000000000000, 0x0186A000000000000000000000000000,
    0x01E84800000000000000000000000000, 0x01312D00000000000000000000000000, 0x017D7840000000000000000000000000,
    0x01DCD650000000000000000000000000, 0x012A05F2000000000000000000000000, 0x0174876E800000000000000000000000,
    0x01D1A94A200000000000000000000000, 0x012309CE540000000000000000000000, 0x016BCC41E90000000000000000000000,
    0x01C6BF52634000000000000000000000, 0x011C37937E0800000000000000000000, 0x016345785D8A00000000000000000000,
    0x01BC16D674EC80000000000000000000, 0x01158E460913D0000000000000000000, 0x015AF1D78B58C4000000000000000000,
    0x01B1AE4D6E2EF5000000000000000000, 0x010F0CF064DD59200000000000000000, 0x0152D02C7E14AF680000000000000000,
    0x01A784379D99DB420000000000000000, 0x0108B2A2C28029094000000000000000, 0x014ADF4B7320334B9000000000000000,
    0x019D971E4FE8401E7400000000000000, 0x01027E72F1F128130880000000000000, 0x01431E0FAE6D7217CAA0000000000000,
    0x0193E5939A08CE9DBD48000000000000, 0x01F8DEF8808B02452C9A000000000000, 0x013B8B5B5056E16B3BE0400000000000,
    0x018A6E32246C99C60AD8500000000000, 0x01ED09BEAD87C0378D8E640000000000, 0x013426172C74D822B878FE8000000000,
    0x01812F9CF7920E2B66973E2000000000, 0x01E17B84357691B6403D0DA800000000, 0x012CED32A16A1B11E826288900000000,
    0x0178287F49C4A1D6622FB2AB40000000, 0x01D6329F1C35CA4BFABB9F5610000000, 0x0125DFA371A19E6F7CB54395CA000000,
    0x016F578C4E0A060B5BE2947B3C800000, 0x01CB2D6F618C878E32DB399A0BA00000, 0x011EFC659CF7D4B8DFC9040047440000,
    0x0166BB7F0435C9E717BB450059150000, 0x01C06A5EC5433C60DDAA16406F5A4000, 0x0118427B3B4A05BC8A8A4DE845986800,
    0x015E531A0A1C872BAD2CE16256FE8200, 0x01B5E7E08CA3A8F6987819BAECBE2280, 0x0111B0EC57E6499A1F4B1014D3F6D590,
    0x01561D276DDFDC00A71DD41A08F48AF4, 0x01ABA4714957D300D0E549208B31ADB1, 0x010B46C6CDD6E3E0828F4DB456FF0C8E,
    0x014E1878814C9CD8A33321216CBECFB2, 0x01A19E96A19FC40ECBFFE969C7EE839E, 0x0105031E2503DA893F7FF1E21CF51243,
    0x014643E5AE44D12B8F5FEE5AA43256D4, 0x0197D4DF19D605767337E9F14D3EEC89, 0x01FDCA16E04B86D41005E46DA08EA7AB,
    0x013E9E4E4C2F34448A03AEC4845928CB, 0x018E45E1DF3B0155AC849A75A56F72FD, 0x01F1D75A5709C1AB17A5C1130ECB4FBD,
    0x013726987666190AEEC798ABE93F11D6, 0x0184F03E93FF9F4DAA797ED6E38ED64B, 0x01E62C4E38FF87211517DE8C9C728BDE,
    0x012FDBB0E39FB474AD2EEB17E1C7976B, 0x017BD29D1C87A191D87AA5DDDA397D46, 0x01DAC74463A989F64E994F5550C7DC97,
    0x0128BC8ABE49F639F11FD195527CE9DE, 0x0172EBAD6DDC73C86D67C5FAA71C2456, 0x01CFA698C95390BA88C1B77950E32D6C,
    0x0121C81F7DD43A74957912ABD28DFC63, 0x016A3A275D494911BAD75756C7317B7C, 0x01C4C8B1349B9B56298D2D2C78FDDA5B,
    0x011AFD6EC0E14115D9F83C3BCB9EA879, 0x0161BCCA7119915B50764B4ABE865297, 0x01BA2BFD0D5FF5B22493DE1D6E27E73D,
    0x01145B7E285BF98F56DC6AD264D8F086, 0x0159725DB272F7F32C938586FE0F2CA8, 0x01AFCEF51F0FB5EFF7B866E8BD92F7D2,
    0x010DE1593369D1B5FAD34051767BDAE3, 0x015159AF8044462379881065D41AD19C, 0x01A5B01B605557AC57EA147F49218603,
    0x01078E111C3556CBB6F24CCF8DB4F3C1, 0x014971956342AC7EA4AEE003712230B2, 0x019BCDFABC13579E4DDA98044D6ABCDF,
    0x010160BCB58C16C2F0A89F02B062B60B, 0x0141B8EBE2EF1C73ACD2C6C35C7B638E, 0x01922726DBAAE39098077874339A3C71,
    0x01F6B0F092959C74BE0956914080CB8E, 0x013A2E965B9D81C8F6C5D61AC8507F38, 0x0188BA3BF284E23B34774BA17A649F07,
    0x01EAE8CAEF261ACA01951E89D8FDC6C8, 0x0132D17ED577D0BE40FD3316279E9C3D, 0x017F85DE8AD5C4EDD13C7FDBB186434C,
    0x01DF67562D8B3629458B9FD29DE7D420, 0x012BA095DC7701D9CB7743E3A2B0E494, 0x017688BB5394C2503E5514DC8B5D1DB9,
    0x01D42AEA2879F2E44DEA5A13AE346527, 0x01249AD2594C37CEB0B2784C4CE0BF38, 0x016DC186EF9F45C25CDF165F6018EF06,
    0x01C931E8AB871732F416DBF7381F2AC8, 0x011DBF316B346E7FD88E497A83137ABD, 0x01652EFDC6018A1FCEB1DBD923D8596C,
    0x01BE7ABD3781ECA7C25E52CF6CCE6FC7, 0x01170CB642B133E8D97AF3C1A40105DC, 0x015CCFE3D35D80E30FD9B0B20D014754,
    0x01B403DCC834E11BD3D01CDE90419929, 0x01108269FD210CB16462120B1A28FFB9, 0x0154A3047C694FDDBD7A968DE0B33FA8,
    0x01A9CBC59B83A3D52CD93C3158E00F92, 0x010A1F5B813246653C07C59ED78C09BB, 0x014CA732617ED7FE8B09B7068D6F0C2A,
    0x019FD0FEF9DE8DFE2DCC24C830CACF34, 0x0103E29F5C2B18BEDC9F96FD1E7EC180, 0x0144DB473335DEEE93C77CBC661E71E1,
    0x01961219000356AA38B95BEB7FA60E59, 0x01FB969F40042C54C6E7B2E65F8F91EF, 0x013D3E2388029BB4FC50CFCFFBB9BB35,
    0x018C8DAC6A0342A23B6503C3FAA82A03, 0x01EFB1178484134ACA3E44B4F9523484, 0x0135CEAEB2D28C0EBE66EAF11BD360D2,
    0x0183425A5F872F126E00A5AD62C83907, 0x01E412F0F768FAD70980CF18BB7A4749, 0x012E8BD69AA19CC665F0816F752C6C8D,
    0x017A2ECC414A03F7FF6CA1CB527787B1, 0x01D8BA7F519C84F5FF47CA3E2715699D, 0x0127748F9301D319BF8CDE66D86D6202,
    0x017151B377C247E02F7016008E88BA83, 0x01CDA62055B2D9D83B4C1B80B22AE923, 0x012087D4358FC827250F91306F5AD1B6,
    0x0168A9C942F3BA30EE53757C8B318623, 0x01C2D43B93B0A8BD29E852DBADFDE7AC, 0x0119C4A53C4E69763A3133C94CBEB0CC,
    0x016035CE8B6203D3C8BD80BB9FEE5CFF, 0x01B843422E3A84C8BAECE0EA87E9F43E, 0x01132A095CE492FD74D40C9294F238A7,
    0x0157F48BB41DB7BCD2090FB73A2EC6D1, 0x01ADF1AEA12525AC068B53A508BA7885, 0x010CB70D24B7378B8417144725748B53,
    0x014FE4D06DE5056E651CD958EED1AE28, 0x01A3DE04895E46C9FE640FAF2A8619B2, 0x01066AC2D5DAEC3E3EFE89CD7A93D00F,
    0x014805738B51A74DCEBE2C40D938C413, 0x019A06D06E261121426DB7510F86F518, 0x0100444244D7CAB4C9849292A9B4592F,
    0x01405552D60DBD61FBE5B73754216F7A, 0x01906AA78B912CBA7ADF25052929CB59, 0x01F485516E7577E91996EE4673743E2F,
    0x0138D352E5096AF1AFFE54EC0828A6DD, 0x018708279E4BC5AE1BFDEA270A32D095, 0x01E8CA3185DEB719A2FD64B0CCBF84BA,
    0x01317E5EF3AB327005DE5EEE7FF7B2F4, 0x017DDDF6B095FF0C0755F6AA1FF59FB1, 0x01DD55745CBB7ECF092B7454A7F3079E,
    0x012A5568B9F52F4165BB28B4E8F7E4C3, 0x0174EAC2E8727B11BF29F2E22335DDF3, 0x01D22573A28F19D62EF46F9AAC035570,
    0x0123576845997025DD58C5C0AB821566, 0x016C2D4256FFCC2F54AEF730D6629AC0, 0x01C73892ECBFBF3B29DAB4FD0BFB4170,
    0x011C835BD3F7D784FA28B11E277D08E6, 0x0163A432C8F5CD6638B2DD65B15C4B1F, 0x01BC8D3F7B3340BFC6DF94BF1DB35DE7,
    0x0115D847AD000877DC4BBCF772901AB0, 0x015B4E5998400A95D35EAC354F34215C, 0x01B221EFFE500D3B48365742A30129B4,
    0x010F5535FEF208450D21F689A5E0BA10, 0x01532A837EAE8A56506A742C0F58E894, 0x01A7F5245E5A2CEBE4851137132F22B9,
    0x0108F936BAF85C136ED32AC26BFD75B4, 0x014B378469B673184A87F57306FCD321, 0x019E056584240FDE5D29F2CFC8BC07E9,
    0x0102C35F729689EAFA3A37C1DD7584F1, 0x014374374F3C2C65B8C8C5B254D2E62E, 0x01945145230B377F26FAF71EEA079FB9,
    0x01F965966BCE055EF0B9B4E6A48987A8, 0x013BDF7E0360C35B5674111026D5F4C9, 0x018AD75D8438F4322C111554308B71FB,
    0x01ED8D34E547313EB7155AA93CAE4E7A, 0x013478410F4C7EC7326D58A9C5ECF10C, 0x01819651531F9E78FF08AED437682D4F,
    0x01E1FBE5A7E786173ECADA89454238A3, 0x012D3D6F88F0B3CE873EC895CB496366, 0x01788CCB6B2CE0C2290E7ABB3E1BBC3F,
    0x01D6AFFE45F818F2B352196A0DA2AB4F, 0x01262DFEEBBB0F97B0134FE24885AB11, 0x016FB97EA6A9D37D9C1823DADAA715D6,
    0x01CBA7DE5054485D031E2CD19150DB4B, 0x011F48EAF234AD3A21F2DC02FAD2890F, 0x01671B25AEC1D888AA6F9303B9872B53,
    0x01C0E1EF1A724EAAD50B77C4A7E8F628, 0x01188D357087712AC5272ADAE8F199D9, 0x015EB082CCA94D757670F591A32E004F,
    0x01B65CA37FD3A0D2D40D32F60BF98063, 0x0111F9E62FE44483C4883FD9C77BF03E, 0x0156785FBBDD55A4B5AA4FD0395AEC4D,
    0x01AC1677AAD4AB0DE314E3C447B1A760, 0x010B8E0ACAC4EAE8ADED0E5AACCF089C, 0x014E718D7D7625A2D96851F15802CAC3,
    0x01A20DF0DCD3AF0B8FC2666DAE037D74, 0x010548B68A044D6739D980048CC22E68, 0x01469AE42C8560C1084FE005AFF2BA03,
    0x0198419D37A6B8F14A63D8071BEF6883, 0x01FE52048590672D9CFCCE08E2EB42A4, 0x013EF342D37A407C821E00C58DD309A7,
    0x018EB0138858D09BA2A580F6F147CC10, 0x01F25C186A6F04C28B4EE134AD99BF15, 0x0137798F428562F997114CC0EC80176D,
    0x018557F31326BBB7FCD59FF127A01D48, 0x01E6ADEFD7F06AA5FC0B07ED7188249A, 0x01302CB5E6F642A7BD86E4F466F516E0,
    0x017C37E360B3D351ACE89E3180B25C98, 0x01DB45DC38E0C8261822C5BDE0DEF3BE, 0x01290BA9A38C7D17CF15BB96AC8B5857,
    0x01734E940C6F9C5DC2DB2A7C57AE2E6D, 0x01D022390F8B83753391F51B6D99BA08, 0x01221563A9B73229403B393124801445,
    0x016A9ABC9424FEB3904A077D6DA01956, 0x01C5416BB92E3E60745C895CC9081FAC, 0x011B48E353BCE6FC48B9D5D9FDA513CB,
    0x01621B1C28AC20BB5AE84B507D0E58BE, 0x01BAA1E332D728EA31A25E249C51EEEE, 0x0114A52DFFC679925F057AD6E1B33554,
    0x0159CE797FB817F6F6C6D98C9A2002AA, 0x01B04217DFA61DF4B4788FEFC0A80354, 0x010E294EEBC7D2B8F0CB59F5D8690214,
    0x0151B3A2A6B9C7672CFE30734E83429A, 0x01A6208B50683940F83DBC9022241340, 0x0107D457124123C89B2695DA15568C08,
    0x0149C96CD6D16CBAC1F03B509AAC2F0A, 0x019C3BC80C85C7E9726C4A24C1573ACD, 0x0101A55D07D39CF1E783AE56F8D684C0,
    0x01420EB449C8842E616499ECB70C25F0, 0x019292615C3AA539F9BDC067E4CF2F6C, 0x01F736F9B3494E88782D3081DE02FB47,
    0x013A825C100DD1154B1C3E512AC1DD0C, 0x018922F31411455A9DE34DE57572544F, 0x01EB6BAFD91596B1455C215ED2CEE963,
    0x0133234DE7AD7E2ECB5994DB43C151DE, 0x017FEC216198DDBA7E2FFA1214B1A655, 0x01DFE729B9FF15291DBBF89699DE0FEB,
    0x012BF07A143F6D39B2957B5E202AC9F3, 0x0176EC98994F48881F3ADA35A8357C6F, 0x01D4A7BEBFA31AAA270990C31242DB8B,
    0x0124E8D737C5F0AA5865FA79EB69C937, 0x016E230D05B76CD4EE7F791866443B85, 0x01C9ABD04725480A2A1F575E7FD54A66,
    0x011E0B622C774D065A53969B0FE54E80, 0x01658E3AB7952047F0E87C41D3DEA220, 0x01BEF1C9657A6859ED229B5248D64AA8,
    0x0117571DDF6C81383435A1136D85EEA9, 0x015D2CE55747A1864143095848E76A53, 0x01B4781EAD1989E7D193CBAE5B2144E8,
    0x0110CB132C2FF630E2FC5F4CF8F4CB11, 0x0154FDD7F73BF3BD1BBB77203731FDD5, 0x01AA3D4DF50AF0AC62AA54E844FE7D4A,
    0x010A6650B926D66BBDAA75112B1F0E4E, 0x014CFFE4E7708C06AD15125575E6D1E2, 0x01A03FDE214CAF08585A56EAD360865B,
    0x010427EAD4CFED6537387652C41C53F8, 0x014531E58A03E8BE850693E7752368F7, 0x01967E5EEC84E2EE264838E1526C4334,
    0x01FC1DF6A7A61BA9AFDA4719A7075402, 0x013D92BA28C7D14A0DE86C7008649481, 0x018CF768B2F9C59C9162878C0A7DB9A1,
    0x01F03542DFB83703B5BB296F0D1D280A, 0x01362149CBD322625194F9E568323906, 0x0183A99C3EC7EAFAE5FA385EC23EC747,
    0x01E494034E79E5B99F78C67672CE7919, 0x012EDC82110C2F9403AB7C0A07C10BB0, 0x017A93A2954F3B7904965B0C89B14E9C,
    0x01D9388B3AA30A5745BBF1CFAC1DA243, 0x0127C35704A5E6768B957721CB92856A, 0x0171B42CC5CF60142E7AD4EA3E7726C4,
    0x01CE2137F74338193A198A24CE14F075, 0x0120D4C2FA8A030FC44FF65700CD1649, 0x016909F3B92C83D3B563F3ECC1005BDB,
    0x01C34C70A777A4C8A2BCF0E7F14072D2, 0x011A0FC668AAC6FD65B61690F6C847C3, 0x016093B802D578BCBF239C35347A59B4,
    0x01B8B8A6038AD6EBEEEC83428198F021, 0x01137367C236C6537553D20990FF9615, 0x01585041B2C477E852A8C68BF53F7B9A,
    0x01AE64521F7595E26752F82EF28F5A81, 0x010CFEB353A97DAD8093DB1D57999890, 0x01503E602893DD18E0B8D1E4AD7FFEB4,
    0x01A44DF832B8D45F18E7065DD8DFFE62, 0x0106B0BB1FB384BB6F9063FAA78BFEFD, 0x01485CE9E7A065EA4B747CF9516EFEBC,
    0x019A742461887F64DE519C37A5CABE6B, 0x01008896BCF54F9F0AF301A2C79EB703, 0x0140AABC6C32A386CDAFC20B798664C4,
    0x0190D56B873F4C68811BB28E57E7FDF5, 0x01F50AC6690F1F82A1629F31EDE1FD72, 0x013926BC01A973B1A4DDA37F34AD3E67,
    0x0187706B0213D09E0E150C5F01D88E01, 0x01E94C85C298C4C5919A4F76C24EB181, 0x0131CFD3999F7AFB7B0071AA39712EF1,
    0x017E43C8800759BA59C08E14C7CD7AAD, 0x01DDD4BAA0093028F030B199F9C0D958, 0x012AA4F4A405BE19961E6F003C1887D7,
    0x01754E31CD072D9FFBA60AC04B1EA9CD, 0x01D2A1BE4048F907FA8F8D705DE65440, 0x0123A516E82D9BA4FC99B8663AAFF4A8,
    0x016C8E5CA239028E3BC0267FC95BF1D2, 0x01C7B1F3CAC74331CAB0301FBBB2EE47, 0x011CCF385EBC89FF1EAE1E13D54FD4EC,
    0x01640306766BAC7EE659A598CAA3CA27, 0x01BD03C81406979E9FF00EFEFD4CBCB1, 0x0116225D0C841EC323F6095F5E4FF5EF,
    0x015BAAF44FA52673ECF38BB735E3F36A, 0x01B295B1638E7010E8306EA5035CF045, 0x010F9D8EDE39060A911E4527221A162B,
    0x015384F295C7478D3565D670EAA09BB6, 0x01A8662F3B39197082BF4C0D2548C2A3, 0x01093FDD8503AFE651B78F88374D79A6,
    0x014B8FD4E6449BDFE625736A4520D810, 0x019E73CA1FD5C2D7DFAED044D6690E14, 0x0103085E53E599C6EBCD422B0601A8CC,
    0x0143CA75E8DF0038A6C092B5C78212FF, 0x0194BD136316C046D070B763396297BF, 0x01F9EC583BDC7058848CE53C07BB3DAF,
    0x013C33B72569C63752D80F4584D5068D, 0x018B40A4EEC437C5278E1316E60A4831,
];

/// 122-bit (stored widened to `u128`) inverse powers of 5; see
/// [`POW5_SIG_TABLE`]'s note on current (non-)use.
#[allow(dead_code)]
pub(super) const POW5_INV_SIG_TABLE: [u128; 291] = [
    0x04000000000000000000000000000001, 0x03333333333333333333333333333334, 0x028F5C28F5C28F5C28F5C28F5C28F5C3,
    0x020C49BA5E353F7CED916872B020C49C, 0x0346DC5D63886594AF4F0D844D013A93, 0x029F16B11C6D1E108C3F3E0370CDC876,
    0x0218DEF416BDB1A6D698FE69270B06C5, 0x035AFE535795E90AF0F4CA41D811A46E, 0x02AF31DC4611873BF3F70834ACDAE9F1,
    0x0225C17D04DAD2965CC5A02A23E254C1, 0x036F9BFB3AF7B756FAD5CD10396A2135, 0x02BFAFFC2F2C92ABFBDE3DA69454E75E,
    0x0232F33025BD42232FE4FE1EDD10B918, 0x0384B84D092ED0384CA19697C81AC1BF, 0x02D09370D42573603D4E1213067BCE33,
    0x024075F3DCEAC2B3643E74DC052FD829, 0x039A5652FB1137856D30BAF9A1E626A7, 0x02E1DEA8C8DA92D12426FBFAE7EB5220,
    0x024E4BBA3A4875741CEBFCC8B9890E80, 0x03B07929F6DA558694ACC7A78F41B0CC, 0x02F394219248446BAA23D2EC729AF3D7,
    0x025C768141D369EFBB4FDBF05BAF2979, 0x03C7240202EBDCB2C54C931A2C4B758D, 0x0305B66802564A289DD6DC14F03C5E0B,
    0x026AF8533511D4ED4B1249AA59C9E4D6, 0x03DE5A1EBB4FBB1544EA0F76F60FD489, 0x0318481895D962776A54D92BF80CAA07,
    0x0279D346DE4781F921DD7A89933D54D2, 0x03F61ED7CA0C0328362F2A75B8622150, 0x032B4BDFD4D668ECF825BB91604E810D,
    0x0289097FDD7853F0C684960DE6A5340B, 0x02073ACCB12D0FF3D203AB3E521DC33C, 0x033EC47AB514E652E99F7863B696052C,
    0x02989D2EF743EB7587B2C6B62BAB3757, 0x0213B0F25F69892AD2F56BC4EFBC2C45, 0x0352B4B6FF0F41DE1E55793B192D13A2,
    0x02A8909265A5CE4B4B77942F475742E8, 0x022073A8515171D5D5F9435905DF68BA, 0x03671F73B54F1C89565B9EF4D6324129,
    0x02B8E5F62AA5B06DDEAFB25D78283421, 0x022D84C4EEEAF38B188C8EB12CECF681, 0x037C07A17E44B8DE8DADB11B7B14BD9B,
    0x02C99FB46503C7187157C0E2C8DD647C, 0x023AE629EA696C138DDFCD823A4AB6CA, 0x0391704310A8ACEC1632E269F6DDF142,
    0x02DAC035A6ED572344F581EE5F17F435, 0x024899C4858AAC1C372ACE584C1329C4, 0x03A75C6DA27779C6BEAAE3C079B842D3,
    0x02EC49F14EC5FB056555830061603576, 0x0256A18DD89E626AB7779C004DE6912B, 0x03BDCF495A9703DDF258F99A163DB512,
    0x02FE3F6DE212697E5B7A614811CAF741, 0x0264FF8B1B41EDFEAF951AA00E3BF901, 0x03D4CC11C53649977F54F7667D2CC19B,
    0x0310A3416A91D47932AA5F8530F09AE3, 0x0273B5CDEEDB1060F55519375A5A1582, 0x03EC56164AF81A34BBBB5B8BC3C3559D,
    0x03237811D593482A2FC916096969114A, 0x0282C674AADC39BB596DAB3ABABA743C, 0x0202385D557CFAFC478AEF622EFB9030,
    0x0336C0955594C4C6D8DE4BD04B2C19E6, 0x029233AAAADD6A38AD7EA30D08F014B8, 0x020E8FBBBBE454FA24654F3DA0C01093,
    0x034A7F92C63A21903A3BB1FC346680EB, 0x02A1FFA89E94E7A694FC8E635D1ECD89, 0x021B32ED4BAA52EBAA63A51C4A7F0AD4,
    0x035EB7E212AA1E45DD6C3B607731AAED, 0x02B22CB4DBBB4B6B1789C919F8F488BD, 0x022823C3E2FC3C55AC6E3A7B2D906D64,
    0x03736C6C9E60608913E390C515B3E23A, 0x02C2BD23B1E6B3A0DCB60D6A77C31B62, 0x0235641C8E52294D7D5E7121F968E2B5,
    0x0388A02DB0837548C8971B698F0E3787, 0x02D3B357C0692AA0A078E2BAD8D82C6C, 0x0242F5DFCD20EEE6E6C71BC8AD79BD24,
    0x039E5632E1CE4B0B0AD82C7448C2C839, 0x02E511C24E3EA26F3BE023903A356CFA, 0x0250DB01D8321B8C2FE682D9C82ABD95,
    0x03B4919C8D1CF8E04CA4048FA6AAC8EE, 0x02F6DAE3A4172D803D5003A61EEF0725, 0x025F1582E9AC24669773361E7F259F51,
    0x03CB559E42AD070A8BEB89CA6508FEE8, 0x0309114B688A6C086FEFA16EB73A6586, 0x026DA76F86D52339F3261ABEF8FB846B,
    0x03E2A57F3E21D1F651D691318E5F3A45, 0x031BB798FE8174C50E4540F471E5C837, 0x027C92E0CB9AC3D0D8376729F4B7D360,
    0x03FA849ADF5E061AF38BD84321261EFF, 0x032ED07BE5E4D1AF293CAD0280EB4BFF, 0x028BD9FCB7EA4158EDCA240200BC3CCC,
    0x02097B309321CDE0BE3B50019A3030A4, 0x03425EB41E9C7C9AC9F88002904D1A9F, 0x029B7EF67EE396E23B2D3335403DAEE6,
    0x0215FF2B98B6124E95BDC291003158B8, 0x035665128DF01D4A892F9DB4CD1BC126, 0x02AB840ED7F34AA207594AF70A7C9A85,
    0x0222D00BDFF5D54E6C476F2C0863AED1, 0x036AE6796656221713A57EACDA3917B4, 0x02BBEB9451DE81AC0FB7988A482DAC90,
    0x022FEFA9DB1867BCD95FAD3B6CF156DA, 0x037FE5DC91C0A5FAF565E1F8AE4EF15C, 0x02CCB7E3A7CD5195911E4E608B725AB0,
    0x023D5FE9530AA7AADA7EA51A0928488D, 0x039566421E7772AAF7310829A8407415, 0x02DDEB68185F8EEF2C2739BAED005CDE,
    0x024B22B9AD193F25BCEC2E2F24004A4B, 0x03AB6AC2AE8ECB6F94AD16B1D333AA11, 0x02EF889BBED8A2BFAA241227DC2954DB,
    0x02593A163246E89954E9A81FE35443E2, 0x03C1F689EA0B0DC22175D9CC9EED396A, 0x03019207EE6F3E34E7917B0A18BDC788,
    0x0267A8065858FE90B9412F3B46FE393A, 0x03D90CD6F3C1974DF535185ED7FD285C, 0x03140A458FCE12A4C42A79E57997537D,
    0x02766E9E0CA4DBB703552E512E12A931, 0x03F0B0FCE107C5F19EEEB081E3510EB4, 0x0326F3FD80D304C14BF226CE4F740BC3,
    0x02858FFE00A8D09AA3281F0B72C33C9C, 0x020473319A20A6E21C2018D5F568FD4A, 0x033A51E8F69AA49CF9CCF48988A7FBA9,
    0x02950E53F87BB6E3FB0A5D3AD3B99621, 0x0210D8432D2FC5832F3B7DC8A96144E7, 0x034E26D1E1E608D1E52BFC7442353B0C,
    0x02A4EBDB1B1E6D74B756639034F76270, 0x021D897C15B1F12A2C451C735D92B526, 0x0362759355E981DD13A1C71EFC1DEEA3,
    0x02B52ADC44BACE4A761B05B2634B2550, 0x022A88B036FBD83B91AF37C1E908EAA6, 0x03774119F192F39282B1F2CFDB417770,
    0x02C5CDAE5ADBF60ECEF4C23FE29AC5F3, 0x0237D7BEAF165E723F2A34FFE87BD190, 0x038C8C644B56FD83984387FFDA5FB5B2,
    0x02D6D6B6A2ABFE02E0360666484C915B, 0x024578921BBCCB35802B3851D3707449, 0x03A25A835F94785599DEC082EBE72075,
    0x02E8486919439377AE4BCD358985B391, 0x02536D20E102DC5FBEA30A913AD15C74, 0x03B8AE9B019E2D65FDD1AA81F7B560B9,
    0x02FA2548CE18245197DAEECE5FC44D61, 0x0261B76D71ACE9DADFE258A51969D781, 0x03CF8BE24F7B0FC4996A276E8F0FBF34,
    0x030C6FE83F95A636E121B9253F3FCC2A, 0x02705986994484F8B41AFA8432997022, 0x03E6F5A4286DA18DECF7F739EA8F19CF,
    0x031F2AE9B9F14E0B23F99294BBA5AE40, 0x027F5587C7F43E6F4FFADBAA2FB7BE99, 0x03FEEF3FA65397187FF7C5DD1925FDC2,
    0x033258FFB842DF46CCC637E4141E649B, 0x028EAD9960357F6BD704F983434B83AF, 0x020BBE144CF79923126A6135CF6F9C8C,
    0x0345FCED47F28E9E83DD685618B29414, 0x029E63F1065BA54B9CB12044E08EDCDD, 0x02184FF405161DD616F419D0B3A57D7D,
    0x035A19866E89C9568B20294DEC3BFBFB, 0x02AE7AD1F207D4453C19BAA4BCFCC996, 0x02252F0E5B39769DC9AE2EEA30CA3ADF,
    0x036EB1B091F58A960F7D17DD1ADD2AFD, 0x02BEF48D41913BAB3F97464A7BE42264, 0x02325D3DCE0DC955CC790508631CE850,
    0x0383C862E3494222E0C1A1A704FB0D4D, 0x02CFD3824F6DCE824D67B4859D95A43E, 0x023FDC683F8B0B9B711FC39E17AAE9CB,
    0x039960A6CC11AC2BE832D2968C44A945, 0x02E11A1F09A7BCEFECF575453D03BA9E, 0x024DAE7F3AEC9726572AC4376402FBB1,
    0x03AF7D985E47583D58446D256CD192B5, 0x02F2CAE04B6C469779D0575123DADBC4, 0x025BD5803C569EDF94A6AC40E97BE303,
    0x03C62266C6F0FE328771139B0F2C9E6C, 0x0304E85238C0CB5B9F8DA948D8F07EBD, 0x026A5374FA33D5E2E60AEDD3E0C06564,
    0x03DD5254C3862304A344AFB9679A3BD2, 0x031775109C6B4F36E903BFC78614FCA8, 0x02792A73B055D8F8BA6966393810CA20,
    0x03F510B91A22F4C12A423D2859B4769A, 0x032A73C7481BF700EE9B642047C39215, 0x02885C9F6CE32C00BEE2B680396941AA,
    0x0206B07F8A4F5666FF1BC53361210155, 0x033DE73276E5570B31C6085235019BBB, 0x0297EC285F1DDF3C27D1A041C4014963,
    0x021323537F4B18FCECA7B367D0010782, 0x0351D21F3211C194ADD91F0C8001A59D, 0x02A7DB4C280E3476F17A7F3D3334847E,
    0x021FE2A3533E905F279532975C2A0398, 0x0366376BB8641A31D8EEB75893766C26, 0x02B82C562D1CE1C17A5892AD42C52352,
    0x022CF044F0E3E7CDFB7A0EF102374F75, 0x037B1A07E7D30C7CC59017E8038BB254, 0x02C8E19FECA8D6CA37A67986693C8EAA,
    0x023A4E198A20ABD4F951FAD1EDCA0BBB, 0x03907CF5A9CDDFBB28832AE97C76792B, 0x02D9FD9154A4B2FC2068EF21305EC756,
    0x0247FE0DDD508F3019ED8C1A8D189F78, 0x03A66349621A7EB35CAF4690E1C0FF26, 0x02EB82A11B48655C4A25D20D81673285,
    0x0256021A7C39EAB03B5174D79AB8F537, 0x03BCD02A605CAAB3921BEE25C45B21F1, 0x02FD735519E3BBC2DB498B5169E2818E,
    0x02645C4414B62FCF15D46F7454B53472, 0x03D3C6D35456B2E4EFBA4BED545520B6, 0x030FD242A9DEF583F2FB6FF110441A2B,
    0x02730E9BBB18C4698F2F8CC0D9D014EF, 0x03EB4A92C4F46D75B1E5AE015C80217F, 0x0322A20F03F6BDF7C1848B344A001ACC,
    0x02821B3F365EFE5FCE03A2903B3348A3, 0x0201AF65C518CB7FD802E873628F6D4F, 0x0335E56FA1C14599599E40B89DB2487F,
    0x029184594E3437ADE14B66FA17C1D399, 0x020E037AA4F692F181091F2E7967DC7A, 0x03499F2AA18A84B59B41CB7D8F0C93F6,
    0x02A14C221AD536F7AF67D5FE0C0A0FF8, 0x021AA34E7BDDC592F2B977FE70080CC7, 0x035DD2172C9608EB1DF58CCA4CD9AE0B,
    0x02B174DF56DE6D88E4C470A1D7148B3C, 0x022790B2ABE5246D83D05A1B1276D5CA, 0x0372811DDFD507159FB3C35E83F1560F,
    0x02C200E4B310D277B2F635E5365AAB3F, 0x0234CD83C273DB92F591C4B75EAEEF66, 0x0387AF39371FC5B7EF4FA125644B18A3,
    0x02D2F2942C196AF98C3FB41DE9D5AD4F, 0x02425BA9BCE122613CFFC34B2177BDD9, 0x039D5F75FB01D09B94CC6BAB68BF9628,
    0x02E44C5E6267DA1610A38955ED6611B9, 0x02503D184EB97B44DA1C6DDE5784DAFB, 0x03B394F3B128C53AF693E2FD58D49191,
    0x02F610C2F4209DC8C5431BFDE0AA0E0E, 0x025E73CF29B3B16D6A9C1664B3BB3E72, 0x03CA52E50F85E8AF10F9BD6DEC5ECA4F,
    0x03084250D937ED58DA616457F04BD50C, 0x026D01DA475FF113E1E783798D09773D, 0x03E19C9072331B53030C058F480F252E,
    0x031AE3A6C1C27C4268D66AD906728425, 0x027BE952349B969B8711EF14052869B7, 0x03F97550542C242C0B4FE4ECD50D75F2,
    0x032DF7737689B689A2A650BD773DF7F5, 0x028B2C5C5ED49207B551DA312C31932A, 0x0208F049E576DB395DDB14F4235ADC22,
    0x034180763BF15EC22FC4EE536BC49369, 0x029ACD2B63277F01BFD0BEA92303A921, 0x021570EF8285FF349973CBBA8269541A,
    0x0355817F373CCB875BEC792A6A42202A, 0x02AACDFF5F63D605E3239421EE9B4CEF, 0x02223E65E5E97804B5B6101B25490A59,
    0x0369FD6FD64259A122BCE691D541AA27, 0x02BB31264501E14DB563EBA7DDCE21B9, 0x022F5A850401810AF78322ECB171B494,
    0x037EF73B399C01AB259E9E47824F8753, 0x02CBF8FC2E1667BC1E187E9F9B72D2A9, 0x023CC73024DEB9634B46CBB2E2C24221,
    0x039471E6A1645BD2120ADF849E039D01, 0x02DD27EBB4504974DB3BE603B19C7D9A, 0x024A865629D9D45D7C2FEB3627B0647C,
    0x03AA7089DC8FBA2F2D197856A5E7072C, 0x02EEC06E4A0C94F28A7AC6ABB7EC05BD, 0x025899F1D4D6DD8ED52F05562CBCD164,
    0x03C0F64FBAF1627E21E4D556ADFAE8A0, 0x0300C50C958DE864E7EA444557FBED4D, 0x0267040A113E5383ECBB69D1132FF10A,
    0x03D8067681FD526CADF8A94E851981AA, 0x0313385ECE6441F08B2D543ED0E13488, 0x0275C6B23EB69B26D5BDDCFF0D80F6D3,
    0x03EFA45064575EA4892FC7FE7C018AEB, 0x03261D0D1D12B21D3A8C9FFEC99AD589, 0x0284E40A7DA88E7DC8707FFF07AF113B,
    0x0203E9A1FE2071FE39F39998D2F2742F, 0x033975CFFD00B6638FEC28F484B7204B, 0x02945E3FFD9A2B82D989BA5D36F8E6A2,
    0x02104B66647B560247A161E42BFA521C, 0x034D4570A0C5566A0C35696D132A1CF9, 0x02A4378D4D6AAB8809C454574288172D,
    0x021CF93DD7888939A169DD129BA0128B, 0x03618EC958DA75290242FB50F9001DAB, 0x02B4723AAD7B90ED9B68C90D940017BC,
    0x0229F4FBBDFC73F14920A0D7A999AC96, 0x037654C5FCC71FE8750101590F5C4757, 0x02C5109E63D27FED2A6734473F7D05DF,
    0x0237407EB641FFF0EEB8F69F65FD9E4C, 0x038B9A6456CFFFE7E45B24323CC8FD46, 0x02D6151D123FFFECB6AF502830A0CA9F,
    0x0244DDB0DB666656F88C402026E7087F, 0x03A162B4923D708B2746CD003E3E73FE, 0x02E7822A0E978D3C1F6BD73364FEC332,
    0x0252CE880BAC70FCE5EFDF5C50CBCF5B, 0x03B7B0D9AC471B2E3CB2FEFA1ADFB22B, 0x02F95A47BD05AF58308F3261AF195B56,
    0x0261150630D159135A0C284E25ADE2AB, 0x03CE8809E7B55B5229AD0D49D5E30445, 0x030BA007EC9115DB548A7107DE4F369D,
    0x026FB3398A0DAB15DD3B8D9FE50C2BB1, 0x03E5EB8F434911BC952C15CCA1AD12B5, 0x031E560C35D40E30775677D6E7BDA891,
];

#[allow(dead_code)]
pub const POW5_SIG_BITS: i32 = 121;
#[allow(dead_code)]
pub const POW5_INV_SIG_BITS: i32 = 122;

/// Exact `f64` powers of ten, `10^0..=10^308`, used by the number
/// reader's exact fast path (spec §4.4 item 1) and `FAST_FP` mode.
/// Each entry is a literal float so the compiler's own correctly-
/// rounded decimal-to-binary conversion produces the value, rather
/// than compounding rounding error through repeated multiplication.
pub static F64_POW10_TABLE: [f64; 309] = [
1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9,
    1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16, 1e17, 1e18, 1e19,
    1e20, 1e21, 1e22, 1e23, 1e24, 1e25, 1e26, 1e27, 1e28, 1e29,
    1e30, 1e31, 1e32, 1e33, 1e34, 1e35, 1e36, 1e37, 1e38, 1e39,
    1e40, 1e41, 1e42, 1e43, 1e44, 1e45, 1e46, 1e47, 1e48, 1e49,
    1e50, 1e51, 1e52, 1e53, 1e54, 1e55, 1e56, 1e57, 1e58, 1e59,
    1e60, 1e61, 1e62, 1e63, 1e64, 1e65, 1e66, 1e67, 1e68, 1e69,
    1e70, 1e71, 1e72, 1e73, 1e74, 1e75, 1e76, 1e77, 1e78, 1e79,
    1e80, 1e81, 1e82, 1e83, 1e84, 1e85, 1e86, 1e87, 1e88, 1e89,
    1e90, 1e91, 1e92, 1e93, 1e94, 1e95, 1e96, 1e97, 1e98, 1e99,
    1e100, 1e101, 1e102, 1e103, 1e104, 1e105, 1e106, 1e107, 1e108, 1e109,
    1e110, 1e111, 1e112, 1e113, 1e114, 1e115, 1e116, 1e117, 1e118, 1e119,
    1e120, 1e121, 1e122, 1e123, 1e124, 1e125, 1e126, 1e127, 1e128, 1e129,
    1e130, 1e131, 1e132, 1e133, 1e134, 1e135, 1e136, 1e137, 1e138, 1e139,
    1e140, 1e141, 1e142, 1e143, 1e144, 1e145, 1e146, 1e147, 1e148, 1e149,
    1e150, 1e151, 1e152, 1e153, 1e154, 1e155, 1e156, 1e157, 1e158, 1e159,
    1e160, 1e161, 1e162, 1e163, 1e164, 1e165, 1e166, 1e167, 1e168, 1e169,
    1e170, 1e171, 1e172, 1e173, 1e174, 1e175, 1e176, 1e177, 1e178, 1e179,
    1e180, 1e181, 1e182, 1e183, 1e184, 1e185, 1e186, 1e187, 1e188, 1e189,
    1e190, 1e191, 1e192, 1e193, 1e194, 1e195, 1e196, 1e197, 1e198, 1e199,
    1e200, 1e201, 1e202, 1e203, 1e204, 1e205, 1e206, 1e207, 1e208, 1e209,
    1e210, 1e211, 1e212, 1e213, 1e214, 1e215, 1e216, 1e217, 1e218, 1e219,
    1e220, 1e221, 1e222, 1e223, 1e224, 1e225, 1e226, 1e227, 1e228, 1e229,
    1e230, 1e231, 1e232, 1e233, 1e234, 1e235, 1e236, 1e237, 1e238, 1e239,
    1e240, 1e241, 1e242, 1e243, 1e244, 1e245, 1e246, 1e247, 1e248, 1e249,
    1e250, 1e251, 1e252, 1e253, 1e254, 1e255, 1e256, 1e257, 1e258, 1e259,
    1e260, 1e261, 1e262, 1e263, 1e264, 1e265, 1e266, 1e267, 1e268, 1e269,
    1e270, 1e271, 1e272, 1e273, 1e274, 1e275, 1e276, 1e277, 1e278, 1e279,
    1e280, 1e281, 1e282, 1e283, 1e284, 1e285, 1e286, 1e287, 1e288, 1e289,
    1e290, 1e291, 1e292, 1e293, 1e294, 1e295, 1e296, 1e297, 1e298, 1e299,
    1e300, 1e301, 1e302, 1e303, 1e304, 1e305, 1e306, 1e307, 1e308,
];

/// For a significand with `F64_SIG_FULL_BITS - bits` leading zero bits
/// beyond the 53 needed for exactness, the largest additional decimal
/// exponent that can still be factored into two exact multiplications
/// (spec §4.4 item 1, "minor extension"). Index is `F64_SIG_FULL_BITS - bits`.
pub static F64_BIT_TO_POW10_EXP_TABLE: [i32; 54] = [
    -1, 0, 0, 1, 1, 2, 2, 3, 3, 3, 4, 4, 5, 5, 6, 6, 6, 7, 7, 8, 8,
    9, 9, 9, 10, 10, 11, 11, 12, 12, 12, 13, 13, 14, 14, 15, 15, 15,
    16, 16, 17, 17, 18, 18, 18, 19, 19, 20, 20, 21, 21, 21, 22, 22,
];
