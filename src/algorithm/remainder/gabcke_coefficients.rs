//! Gabcke coefficient table for the full-precision remainder tier.
//!
//! Power-series coefficients of the five Cj terms of the Riemann-Siegel
//! remainder in the variable (1-2P), after Gabcke's recomputation of the
//! classical Haselgrove tables. Each Cj carries 44 nonzero coefficients
//! given to 50 decimal places, good for roughly 70 significant digits in
//! the summed remainder. C0, C2 and C4 are even functions (coefficients
//! occupy even power slots), C1 and C3 odd (odd slots).
//!
//! The strings are parsed into `rug::Float` values at the working
//! precision on first use and cached per precision for the process
//! lifetime; see `gabcke.rs`.

/// Nonzero coefficients carried per Cj term.
pub const GABCKE_COEFF_PER_CJ: usize = 44;

/// Powers of (1-2P) required by the table: exponents 0 through 87.
pub const GABCKE_POWERS_OF_P: usize = 88;

/// The five Cj coefficient sequences as 50-decimal-place literals.
pub const GABCKE_COEFF_STR: [[&str; GABCKE_COEFF_PER_CJ]; 5] = [
    // C0: even powers of (1-2P): slots 0, 2, 4, ...
    [
        "0.38268343236508977172845998403039886676134456248563",
        "0.43724046807752044936029646737133198707304150104236",
        "0.13237657548034352332403526739151055547432299555867",
        "-0.01360502604767418865498318870909990766070687027422",
        "-0.01356762197010358088791567058349920618602959696188",
        "-0.00162372532314446528285462529413364972565920171817",
        "0.00029705353733379690783127283399515866906793333345",
        "0.00007943300879521469588016390264879501448730991526",
        "0.00000046556124614504505037063402160347623124041457",
        "-0.00000143272516309551057540824631206261588824625803",
        "-0.00000010354847112312946075007415677384034988827246",
        "0.00000001235792708386173805612576262312530316510118",
        "0.00000000178810838579549049856667814070690456645456",
        "-0.00000000003391414389927035906940621897884455615248",
        "-0.00000000001632663390256590510137405297104810281346",
        "-0.00000000000037851093185412203828546472001850450264",
        "0.00000000000009327423259201724845662320639869863600",
        "0.00000000000000522184301597813685531389314785302371",
        "-0.00000000000000033506730727442637895150903579473261",
        "-0.00000000000000003412426522811726494080987104562059",
        "0.00000000000000000057512033414323991603395017951646",
        "0.00000000000000000014895301363211505454756277757347",
        "0.00000000000000000000125653727170214168533042817661",
        "-0.00000000000000000000047212952501434256689539881367",
        "-0.00000000000000000000001326906936303961999273541309",
        "0.00000000000000000000000110534399951214183445378225",
        "0.00000000000000000000000005499646377527465511140104",
        "-0.00000000000000000000000000182313765023180262806411",
        "-0.00000000000000000000000000015689403737720880146868",
        "0.00000000000000000000000000000158396350882380116107",
        "0.00000000000000000000000000000034346207254372040220",
        "0.00000000000000000000000000000000170210335003170178",
        "-0.00000000000000000000000000000000059951193049578167",
        "-0.00000000000000000000000000000000001048768275409445",
        "0.00000000000000000000000000000000000084221351783493",
        "0.00000000000000000000000000000000000002584703859772",
        "-0.00000000000000000000000000000000000000093476393749",
        "-0.00000000000000000000000000000000000000004569419225",
        "0.00000000000000000000000000000000000000000075455974",
        "0.00000000000000000000000000000000000000000006461816",
        "-0.00000000000000000000000000000000000000000000027882",
        "-0.00000000000000000000000000000000000000000000007609",
        "-0.00000000000000000000000000000000000000000000000038",
        "0.00000000000000000000000000000000000000000000000008",
    ],
    // C1: odd powers of (1-2P): slots 1, 3, 5, ...
    [
        "0.02682510262837534702999140395566674965927047243064",
        "-0.01378477342635185304987045258989616236594822559753",
        "-0.03849125048223508222873641536318936689609880749451",
        "-0.00987106629906207647201214704618854069280421459667",
        "0.00331075976085840433290907695130069780280209185612",
        "0.00146478085779541508249779656198311197807754577229",
        "0.00001320794062487696367516144749443096782429183541",
        "-0.00005922748701847141323223499528189568406802912492",
        "-0.00000598024258537344858771083507451585841933589017",
        "0.00000096413224561698263526729853298516668757078366",
        "0.00000018334733722714411760016793657832219080753603",
        "-0.00000000446708756271783359956079422715055193465747",
        "-0.00000000270963508217727432169262839870919372593160",
        "-0.00000000007785288654315851046294823085209610006728",
        "0.00000000002343762601089368853248455048710451227313",
        "0.00000000000158301727899875216421622264262874211967",
        "-0.00000000000012119941573723791246646344738017572576",
        "-0.00000000000001458378116110830701758285481698999317",
        "0.00000000000000028786305258131917504558212800208761",
        "0.00000000000000008662862902123724122528252887933104",
        "0.00000000000000000084307227271370412715600225314627",
        "-0.00000000000000000036308072230973462001732461811033",
        "-0.00000000000000000001162669821283829671941388862925",
        "0.00000000000000000000109754867115275318159018328340",
        "0.00000000000000000000006157399020468427103881470791",
        "-0.00000000000000000000000229092800676784715139638263",
        "-0.00000000000000000000000022032811748848795343795983",
        "0.00000000000000000000000000247602518004027850828527",
        "0.00000000000000000000000000059542772155836578022727",
        "0.00000000000000000000000000000326120207467959526153",
        "-0.00000000000000000000000000000126540355910411622437",
        "-0.00000000000000000000000000000002431284696549698190",
        "0.00000000000000000000000000000000213830113875469537",
        "0.00000000000000000000000000000000007167799413941062",
        "-0.00000000000000000000000000000000000282429360723367",
        "-0.00000000000000000000000000000000000015006074196069",
        "0.00000000000000000000000000000000000000268731894053",
        "0.00000000000000000000000000000000000000024904195008",
        "-0.00000000000000000000000000000000000000000116053898",
        "-0.00000000000000000000000000000000000000000034137546",
        "-0.00000000000000000000000000000000000000000000182473",
        "0.00000000000000000000000000000000000000000000039328",
        "0.00000000000000000000000000000000000000000000000562",
        "-0.00000000000000000000000000000000000000000000000038",
    ],
    // C2: even powers of (1-2P): slots 0, 2, 4, ...
    [
        "0.00518854283029316849378458151923095956596868433791",
        "0.00030946583880634746033456743609587882366950030795",
        "-0.01133594107822937338218243525588351341024947489026",
        "0.00223304574195814477205712552758036815709839799816",
        "0.00519663740886233020511692695306819188851583210762",
        "0.00034399144076208336694655913579918095984185890021",
        "-0.00059106484274705828217322523030773952765883756102",
        "-0.00010229972547935857454427867522727787133943747273",
        "0.00002088839221699275540807329617417541593118630536",
        "0.00000592766549309653595789199648498286333574224986",
        "-0.00000016423838362436275977690302847783780496161213",
        "-0.00000015161199700940682861734605397187381660081084",
        "-0.00000000590780369820666796292279025397896206071628",
        "0.00000000209115148594781889777455551897225803958857",
        "0.00000000017815649583292351053799701878847486656010",
        "-0.00000000001616407245535383075285576944447385777680",
        "-0.00000000000238069624966676157072107403801358497816",
        "0.00000000000005398265295542594918182004148336822987",
        "0.00000000000001975014219696951527330873358845172519",
        "0.00000000000000023332868732882634831048153005923548",
        "-0.00000000000000011187517610048080208200483808971616",
        "-0.00000000000000000416400948888376718850112283643331",
        "0.00000000000000000044460811092918830289030435009287",
        "0.00000000000000000002854611478363714454573387426978",
        "-0.00000000000000000000119132314300378943049718475053",
        "-0.00000000000000000000012981634360736498946709902313",
        "0.00000000000000000000000161237631780332623387796587",
        "0.00000000000000000000000043824975198873440596552584",
        "0.00000000000000000000000000271863895765557591388204",
        "-0.00000000000000000000000000114588965067745803697439",
        "-0.00000000000000000000000000002441531818192752297891",
        "0.00000000000000000000000000000235056750867904346067",
        "0.00000000000000000000000000000008669258995621298718",
        "-0.00000000000000000000000000000000372397798548946268",
        "-0.00000000000000000000000000000000021646033266321799",
        "0.00000000000000000000000000000000000420345775193556",
        "0.00000000000000000000000000000000000042440524948043",
        "-0.00000000000000000000000000000000000000212313927539",
        "-0.00000000000000000000000000000000000000068134963731",
        "-0.00000000000000000000000000000000000000000395473207",
        "0.00000000000000000000000000000000000000000091211999",
        "0.00000000000000000000000000000000000000000001405333",
        "-0.00000000000000000000000000000000000000000000102240",
        "-0.00000000000000000000000000000000000000000000002613",
    ],
    // C3: odd powers of (1-2P): slots 1, 3, 5, ...
    [
        "0.00133971609071945690426983572994522812385635395317",
        "-0.00374421513637939370466416186446239658128431504245",
        "0.00133031789193214681203185472240241050989708824610",
        "0.00226546607654717871147603199052100688741195134489",
        "-0.00095484999985067304151122551576501133551046376633",
        "-0.00060100384589636039120758058757956112869325559075",
        "0.00010128858286776621953344349418087858288813181267",
        "0.00006865733449299825642457428364865218534328592530",
        "-0.00000059853667915385981593059338532894744760332543",
        "-0.00000333165985123994712904355366983830793171285955",
        "-0.00000021919289102435081057184842192253694457056301",
        "0.00000007890884245681494410555248261568885233534195",
        "0.00000000941468508129526215165246515670888721434441",
        "-0.00000000095701162108834803018807228477368994149204",
        "-0.00000000018763137453470662796812970577763318771497",
        "0.00000000000443783767932339932746470898496798203943",
        "0.00000000000224267385056173532484110685730637439088",
        "0.00000000000003627686865735243689408255637923200993",
        "-0.00000000000001763980955082158160783112149806740561",
        "-0.00000000000000079607652467867777572903451792778777",
        "0.00000000000000009419651490589690763914895025694424",
        "0.00000000000000000713310385456965782455666792463721",
        "-0.00000000000000000032899105845546243211796652584927",
        "-0.00000000000000000004180730374898459291362924870562",
        "0.00000000000000000000055505420716463337897821164027",
        "0.00000000000000000000017870441906260123858717636353",
        "0.00000000000000000000000133128039646560942862973430",
        "-0.00000000000000000000000058186106110909875161792166",
        "-0.00000000000000000000000001401903608852655537436497",
        "0.00000000000000000000000000146413202116262541489978",
        "0.00000000000000000000000000006023326551089142318945",
        "-0.00000000000000000000000000000280644723191136074804",
        "-0.00000000000000000000000000000018065060055924548468",
        "0.00000000000000000000000000000000377950833193408111",
        "0.00000000000000000000000000000000042145580529475628",
        "-0.00000000000000000000000000000000000221106192833988",
        "-0.00000000000000000000000000000000000079778571914915",
        "-0.00000000000000000000000000000000000000513487981542",
        "0.00000000000000000000000000000000000000124864063022",
        "0.00000000000000000000000000000000000000002092185069",
        "-0.00000000000000000000000000000000000000000162363775",
        "-0.00000000000000000000000000000000000000000004484110",
        "0.00000000000000000000000000000000000000000000173507",
        "0.00000000000000000000000000000000000000000000007222",
    ],
    // C4: even powers of (1-2P): slots 0, 2, 4, ...
    [
        "0.00046483389361763381853630462559567243544858606911",
        "-0.00100566073653404707597788497286295365760752447568",
        "0.00024044856573725793022445667829485747077963860162",
        "0.00102830861497023218782629831261578755988631179072",
        "-0.00076578610717556441865998158000799926882094484998",
        "-0.00020365286803084817621484387494623419953462699416",
        "0.00023212290491068727895136126501723197074780360658",
        "0.00003260214424386519760773778836663428482253948214",
        "-0.00002557906251794952514024604007009945231633203060",
        "-0.00000410746443891574475398195890466429738656539030",
        "0.00000117811136403712938813007699193240367475638687",
        "0.00000024456561422484578542315709490278740069606211",
        "-0.00000002391582476734432243032940478522367618861144",
        "-0.00000000750521420703575528853912019604498874019466",
        "0.00000000013312279416258428192910105598670992047183",
        "0.00000000013440626754225619718698076434287995714390",
        "0.00000000000351377004243048592869350055798895429774",
        "-0.00000000000151915445337039193357444249876308897131",
        "-0.00000000000008915417681447087305494786544999929733",
        "0.00000000000001119589116522853577323213474908058074",
        "0.00000000000000105160133299148149636677048165519743",
        "-0.00000000000000005178655273646683661538130298465863",
        "-0.00000000000000000806587486191656605153729054425379",
        "0.00000000000000000010608204530563965950481147394417",
        "0.00000000000000000004433680674299408727792481558327",
        "0.00000000000000000000043200511470350152434960307768",
        "-0.00000000000000000000018230389229596893305420522677",
        "-0.00000000000000000000000511993691748328610325158521",
        "0.00000000000000000000000056950109195378247473500907",
        "0.00000000000000000000000002669065454893920724427408",
        "-0.00000000000000000000000000133326298640981511218979",
        "-0.00000000000000000000000000009685109548217073219219",
        "0.00000000000000000000000000000215253811245760251413",
        "0.00000000000000000000000000000027096198717963254227",
        "-0.00000000000000000000000000000000142202035675783595",
        "-0.00000000000000000000000000000000060927948401758935",
        "-0.00000000000000000000000000000000000449161306057492",
        "0.00000000000000000000000000000000000112252068924698",
        "0.00000000000000000000000000000000000002074296635345",
        "-0.00000000000000000000000000000000000000170358564578",
        "-0.00000000000000000000000000000000000000005135456999",
        "0.00000000000000000000000000000000000000000210751424",
        "0.00000000000000000000000000000000000000000009526704",
        "-0.00000000000000000000000000000000000000000000203596",
    ],
];
