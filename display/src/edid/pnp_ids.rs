// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:disable

//! Built-in table of registered PNP manufacturer IDs.
//!
//! The table is generated from the `hwdata` `pnp.ids` vendor database. Virtual display
//! vendors (`RHT` for QEMU) and panel makers that only show up inside laptops (`INL`,
//! `BOE`, `IVO`) are registered there like everyone else. Entries are sorted by code
//! (byte-wise), which [`lookup_pnp_id`] relies on for its binary search.

/// `(code, vendor name)` pairs, sorted by `code`.
pub static PNP_IDS: &[([u8; 3], &str)] = &[
    (*b"AAA", "Avolites Ltd"),
    (*b"AAC", "AcerView"),
    (*b"AAE", "Anatek Electronics Inc."),
    (*b"AAM", "Aava Mobile Oy"),
    (*b"AAN", "AAEON Technology Inc."),
    (*b"AAT", "Ann Arbor Technologies"),
    (*b"ABA", "ABBAHOME INC."),
    (*b"ABC", "AboCom System Inc."),
    (*b"ABD", "Allen Bradley Company"),
    (*b"ABE", "Alcatel Bell"),
    (*b"ABO", "D-Link Systems Inc"),
    (*b"ABP", "Advanced System Products"),
    (*b"ABS", "Abaco Systems, Inc."),
    (*b"ABT", "Anchor Bay Technologies, Inc."),
    (*b"ABV", "Advanced Research Technology"),
    (*b"ACA", "Ariel Corporation"),
    (*b"ACB", "Aculab Ltd"),
    (*b"ACC", "Accton Technology Corporation"),
    (*b"ACD", "AWETA BV"),
    (*b"ACE", "Actek Engineering Pty Ltd"),
    (*b"ACG", "A&R Cambridge Ltd."),
    (*b"ACH", "Archtek Telecom Corporation"),
    (*b"ACI", "Asus Computer Inc"),
    (*b"ACK", "Acksys"),
    (*b"ACL", "Apricot Computers"),
    (*b"ACM", "Acroloop Motion Control Systems Inc"),
    (*b"ACO", "Allion Computer Inc."),
    (*b"ACP", "Aspen Tech Inc"),
    (*b"ACR", "Acer Technologies"),
    (*b"ACS", "Altos Computer Systems"),
    (*b"ACT", "Applied Creative Technology"),
    (*b"ACU", "Acculogic"),
    (*b"ACV", "ActivCard S.A"),
    (*b"ADA", "Addi-Data GmbH"),
    (*b"ADB", "Aldebbaron"),
    (*b"ADC", "Acnhor Datacomm"),
    (*b"ADD", "Advanced Peripheral Devices Inc"),
    (*b"ADE", "Arithmos, Inc."),
    (*b"ADH", "Aerodata Holdings Ltd"),
    (*b"ADI", "ADI Systems Inc"),
    (*b"ADK", "Adtek System Science Company Ltd"),
    (*b"ADL", "ASTRA Security Products Ltd"),
    (*b"ADM", "Ad Lib MultiMedia Inc"),
    (*b"ADN", "Analog & Digital Devices Tel. Inc"),
    (*b"ADP", "Adaptec Inc"),
    (*b"ADR", "Nasa Ames Research Center"),
    (*b"ADS", "Analog Devices Inc"),
    (*b"ADT", "Aved Display Technologies"),
    (*b"ADV", "Advanced Micro Devices Inc"),
    (*b"ADX", "Adax Inc"),
    (*b"ADZ", "ADDER TECHNOLOGY LTD"),
    (*b"AEC", "Antex Electronics Corporation"),
    (*b"AED", "Advanced Electronic Designs, Inc."),
    (*b"AEI", "Actiontec Electric Inc"),
    (*b"AEJ", "Alpha Electronics Company"),
    (*b"AEM", "ASEM S.p.A."),
    (*b"AEN", "Avencall"),
    (*b"AEP", "Aetas Peripheral International"),
    (*b"AET", "Aethra Telecomunicazioni S.r.l."),
    (*b"AFA", "Alfa Inc"),
    (*b"AGC", "Beijing Aerospace Golden Card Electronic Engineering Co.,Ltd."),
    (*b"AGI", "Artish Graphics Inc"),
    (*b"AGL", "Argolis"),
    (*b"AGO", "AlgolTek, Inc."),
    (*b"AGT", "Agilent Technologies"),
    (*b"AHC", "Advantech Co., Ltd."),
    (*b"AIC", "Arnos Insturments & Computer Systems"),
    (*b"AIE", "Altmann Industrieelektronik"),
    (*b"AII", "Amptron International Inc."),
    (*b"AIL", "Altos India Ltd"),
    (*b"AIM", "AIMS Lab Inc"),
    (*b"AIR", "Advanced Integ. Research Inc"),
    (*b"AIS", "Alien Internet Services"),
    (*b"AIW", "Aiwa Company Ltd"),
    (*b"AIX", "ALTINEX, INC."),
    (*b"AJA", "AJA Video Systems, Inc."),
    (*b"AKB", "Akebia Ltd"),
    (*b"AKE", "AKAMI Electric Co.,Ltd"),
    (*b"AKI", "AKIA Corporation"),
    (*b"AKL", "AMiT Ltd"),
    (*b"AKM", "Asahi Kasei Microsystems Company Ltd"),
    (*b"AKP", "Atom Komplex Prylad"),
    (*b"AKY", "Askey Computer Corporation"),
    (*b"ALA", "Alacron Inc"),
    (*b"ALC", "Altec Corporation"),
    (*b"ALD", "In4S Inc"),
    (*b"ALG", "Realtek Semiconductor Corp."),
    (*b"ALH", "AL Systems"),
    (*b"ALI", "Acer Labs"),
    (*b"ALJ", "Altec Lansing"),
    (*b"ALK", "Acrolink Inc"),
    (*b"ALL", "Alliance Semiconductor Corporation"),
    (*b"ALM", "Acutec Ltd."),
    (*b"ALN", "Alana Technologies"),
    (*b"ALO", "Algolith Inc."),
    (*b"ALP", "Alps Electric Company Ltd"),
    (*b"ALR", "Advanced Logic"),
    (*b"ALS", "Avance Logic Inc"),
    (*b"ALT", "Altra"),
    (*b"ALV", "AlphaView LCD"),
    (*b"ALX", "ALEXON Co.,Ltd."),
    (*b"AMA", "Asia Microelectronic Development Inc"),
    (*b"AMB", "Ambient Technologies, Inc."),
    (*b"AMC", "Attachmate Corporation"),
    (*b"AMD", "Amdek Corporation"),
    (*b"AMI", "American Megatrends Inc"),
    (*b"AML", "Anderson Multimedia Communications (HK) Limited"),
    (*b"AMN", "Amimon LTD."),
    (*b"AMO", "Amino Technologies PLC and Amino Communications Limited"),
    (*b"AMP", "AMP Inc"),
    (*b"AMR", "AmTRAN Technology Co., Ltd."),
    (*b"AMS", "ARMSTEL, Inc."),
    (*b"AMT", "AMT International Industry"),
    (*b"AMW", "AMW"),
    (*b"AMX", "AMX LLC"),
    (*b"ANA", "Anakron"),
    (*b"ANC", "Ancot"),
    (*b"AND", "Adtran Inc"),
    (*b"ANI", "Anigma Inc"),
    (*b"ANK", "Anko Electronic Company Ltd"),
    (*b"ANL", "Analogix Semiconductor, Inc"),
    (*b"ANO", "Anorad Corporation"),
    (*b"ANP", "Andrew Network Production"),
    (*b"ANR", "ANR Ltd"),
    (*b"ANS", "Ansel Communication Company"),
    (*b"ANT", "Ace CAD Enterprise Company Ltd"),
    (*b"ANW", "Analog Way SAS"),
    (*b"ANX", "Acer Netxus Inc"),
    (*b"AOA", "AOpen Inc."),
    (*b"AOC", "AOC"),
    (*b"AOE", "Advanced Optics Electronics, Inc."),
    (*b"AOL", "America OnLine"),
    (*b"AOT", "Alcatel"),
    (*b"APC", "American Power Conversion"),
    (*b"APD", "AppliAdata"),
    (*b"APE", "Alpine Electronics, Inc."),
    (*b"APG", "Horner Electric Inc"),
    (*b"API", "A Plus Info Corporation"),
    (*b"APL", "Aplicom Oy"),
    (*b"APM", "Applied Memory Tech"),
    (*b"APN", "Appian Tech Inc"),
    (*b"APP", "Apple Computer Inc"),
    (*b"APR", "Aprilia s.p.a."),
    (*b"APS", "Autologic Inc"),
    (*b"APT", "Audio Processing Technology Ltd"),
    (*b"APV", "A+V Link"),
    (*b"APX", "AP Designs Ltd"),
    (*b"ARC", "Alta Research Corporation"),
    (*b"ARE", "ICET S.p.A."),
    (*b"ARG", "Argus Electronics Co., LTD"),
    (*b"ARI", "Argosy Research Inc"),
    (*b"ARK", "Ark Logic Inc"),
    (*b"ARL", "Arlotto Comnet Inc"),
    (*b"ARM", "Arima"),
    (*b"ARO", "Poso International B.V."),
    (*b"ARS", "Arescom Inc"),
    (*b"ART", "Corion Industrial Corporation"),
    (*b"ASC", "Ascom Strategic Technology Unit"),
    (*b"ASD", "USC Information Sciences Institute"),
    (*b"ASE", "AseV Display Labs"),
    (*b"ASH", "Ashton Bentley Concepts"),
    (*b"ASI", "Ahead Systems"),
    (*b"ASK", "Ask A/S"),
    (*b"ASL", "AccuScene Corporation Ltd"),
    (*b"ASM", "ASEM S.p.A."),
    (*b"ASN", "Asante Tech Inc"),
    (*b"ASP", "ASP Microelectronics Ltd"),
    (*b"AST", "AST Research Inc"),
    (*b"ASU", "Asuscom Network Inc"),
    (*b"ASX", "AudioScience"),
    (*b"ASY", "Rockwell Collins / Airshow Systems"),
    (*b"ATA", "Allied Telesyn International (Asia) Pte Ltd"),
    (*b"ATC", "Ably-Tech Corporation"),
    (*b"ATD", "Alpha Telecom Inc"),
    (*b"ATE", "Innovate Ltd"),
    (*b"ATH", "Athena Informatica S.R.L."),
    (*b"ATI", "Allied Telesis KK"),
    (*b"ATK", "Allied Telesyn Int'l"),
    (*b"ATL", "Arcus Technology Ltd"),
    (*b"ATM", "ATM Ltd"),
    (*b"ATN", "Athena Smartcard Solutions Ltd."),
    (*b"ATO", "ASTRO DESIGN, INC."),
    (*b"ATP", "Alpha-Top Corporation"),
    (*b"ATT", "AT&T"),
    (*b"ATV", "Office Depot, Inc."),
    (*b"ATX", "Athenix Corporation"),
    (*b"AUI", "Alps Electric Inc"),
    (*b"AUO", "AU Optronics"),
    (*b"AUR", "Aureal Semiconductor"),
    (*b"AUS", "ASUSTek COMPUTER INC"),
    (*b"AUT", "Autotime Corporation"),
    (*b"AUV", "Auvidea GmbH"),
    (*b"AVA", "Avaya Communication"),
    (*b"AVC", "Auravision Corporation"),
    (*b"AVD", "Avid Electronics Corporation"),
    (*b"AVE", "Add Value Enterpises (Asia) Pte Ltd"),
    (*b"AVI", "Nippon Avionics Co.,Ltd"),
    (*b"AVL", "Avalue Technology Inc."),
    (*b"AVM", "AVM GmbH"),
    (*b"AVN", "Advance Computer Corporation"),
    (*b"AVO", "Avocent Corporation"),
    (*b"AVR", "AVer Information Inc."),
    (*b"AVT", "Avtek (Electronics) Pty Ltd"),
    (*b"AWC", "Access Works Comm Inc"),
    (*b"AWL", "Aironet Wireless Communications, Inc"),
    (*b"AWS", "Wave Systems"),
    (*b"AXB", "Adrienne Electronics Corporation"),
    (*b"AXC", "AXIOMTEK CO., LTD."),
    (*b"AXE", "Axell Corporation"),
    (*b"AXI", "American Magnetics"),
    (*b"AXL", "Axel"),
    (*b"AXO", "Axonic Labs LLC"),
    (*b"AXP", "American Express"),
    (*b"AXT", "Axtend Technologies Inc"),
    (*b"AXX", "Axxon Computer Corporation"),
    (*b"AXY", "AXYZ Automation Services, Inc"),
    (*b"AYD", "Aydin Displays"),
    (*b"AYR", "Airlib, Inc"),
    (*b"AZM", "AZ Middelheim - Radiotherapy"),
    (*b"AZT", "Aztech Systems Ltd"),
    (*b"BAC", "Biometric Access Corporation"),
    (*b"BAN", "Banyan"),
    (*b"BBB", "an-najah university"),
    (*b"BBH", "B&Bh"),
    (*b"BBL", "Brain Boxes Limited"),
    (*b"BBY", "Best Buy"),
    (*b"BCC", "Beaver Computer Corporaton"),
    (*b"BCD", "Barco GmbH"),
    (*b"BCM", "Broadcom"),
    (*b"BCQ", "Deutsche Telekom Berkom GmbH"),
    (*b"BCS", "Booria CAD/CAM systems"),
    (*b"BDO", "Brahler ICS"),
    (*b"BDR", "Blonder Tongue Labs, Inc."),
    (*b"BDS", "Barco Display Systems"),
    (*b"BEC", "Elektro Beckhoff GmbH"),
    (*b"BEI", "Beckworth Enterprises Inc"),
    (*b"BEK", "Beko Elektronik A.S."),
    (*b"BEL", "Beltronic Industrieelektronik GmbH"),
    (*b"BEO", "Baug & Olufsen"),
    (*b"BFE", "B.F. Engineering Corporation"),
    (*b"BGB", "Barco Graphics N.V"),
    (*b"BGT", "Budzetron Inc"),
    (*b"BHZ", "BitHeadz, Inc."),
    (*b"BIC", "Big Island Communications"),
    (*b"BII", "Boeckeler Instruments Inc"),
    (*b"BIL", "Billion Electric Company Ltd"),
    (*b"BIO", "BioLink Technologies International, Inc."),
    (*b"BIT", "Bit 3 Computer"),
    (*b"BLI", "Busicom"),
    (*b"BLN", "BioLink Technologies"),
    (*b"BLP", "Bloomberg L.P."),
    (*b"BMD", "Blackmagic Design"),
    (*b"BMI", "Benson Medical Instruments Company"),
    (*b"BML", "BIOMED Lab"),
    (*b"BMS", "BIOMEDISYS"),
    (*b"BNE", "Bull AB"),
    (*b"BNK", "Banksia Tech Pty Ltd"),
    (*b"BNO", "Bang & Olufsen"),
    (*b"BNQ", "BenQ Corporation"),
    (*b"BNS", "Boulder Nonlinear Systems"),
    (*b"BOB", "Rainy Orchard"),
    (*b"BOE", "BOE"),
    (*b"BOI", "NINGBO BOIGLE DIGITAL TECHNOLOGY CO.,LTD"),
    (*b"BOS", "BOS"),
    (*b"BPD", "Micro Solutions, Inc."),
    (*b"BPU", "Best Power"),
    (*b"BRA", "Braemac Pty Ltd"),
    (*b"BRC", "BARC"),
    (*b"BRG", "Bridge Information Co., Ltd"),
    (*b"BRI", "Boca Research Inc"),
    (*b"BRM", "Braemar Inc"),
    (*b"BRO", "BROTHER INDUSTRIES,LTD."),
    (*b"BSE", "Bose Corporation"),
    (*b"BSL", "Biomedical Systems Laboratory"),
    (*b"BST", "BodySound Technologies, Inc."),
    (*b"BTC", "Bit 3 Computer"),
    (*b"BTE", "Brilliant Technology"),
    (*b"BTF", "Bitfield Oy"),
    (*b"BTI", "BusTech Inc"),
    (*b"BTO", "BioTao Ltd"),
    (*b"BUF", "Yasuhiko Shirai Melco Inc"),
    (*b"BUG", "B.U.G., Inc."),
    (*b"BUJ", "ATI Tech Inc"),
    (*b"BUL", "Bull"),
    (*b"BUR", "Bernecker & Rainer Ind-Eletronik GmbH"),
    (*b"BUS", "BusLogic Inc"),
    (*b"BUT", "21ST CENTURY ENTERTAINMENT"),
    (*b"BWK", "Bitworks Inc."),
    (*b"BXE", "Buxco Electronics"),
    (*b"BYD", "byd:sign corporation"),
    (*b"CAA", "Castles Automation Co., Ltd"),
    (*b"CAC", "CA & F Elettronica"),
    (*b"CAG", "CalComp"),
    (*b"CAI", "Canon Inc."),
    (*b"CAL", "Acon"),
    (*b"CAM", "Cambridge Audio"),
    (*b"CAN", "Canopus Company Ltd"),
    (*b"CAR", "Cardinal Company Ltd"),
    (*b"CAS", "CASIO COMPUTER CO.,LTD"),
    (*b"CAT", "Consultancy in Advanced Technology"),
    (*b"CAV", "Cavium Networks, Inc"),
    (*b"CBI", "ComputerBoards Inc"),
    (*b"CBR", "Cebra Tech A/S"),
    (*b"CBT", "Cabletime Ltd"),
    (*b"CBX", "Cybex Computer Products Corporation"),
    (*b"CCC", "C-Cube Microsystems"),
    (*b"CCI", "Cache"),
    (*b"CCJ", "CONTEC CO.,LTD."),
    (*b"CCL", "CCL/ITRI"),
    (*b"CCP", "Capetronic USA Inc"),
    (*b"CDC", "Core Dynamics Corporation"),
    (*b"CDE", "Colin.de"),
    (*b"CDG", "Christie Digital Systems Inc"),
    (*b"CDI", "Concept Development Inc"),
    (*b"CDK", "Cray Communications"),
    (*b"CDN", "Codenoll Technical Corporation"),
    (*b"CDP", "CalComp"),
    (*b"CDS", "Computer Diagnostic Systems"),
    (*b"CDT", "IBM Corporation"),
    (*b"CDV", "Convergent Design Inc."),
    (*b"CEA", "Consumer Electronics Association"),
    (*b"CEC", "Chicony Electronics Company Ltd"),
    (*b"CED", "Cambridge Electronic Design Ltd"),
    (*b"CEF", "Cefar Digital Vision"),
    (*b"CEI", "Crestron Electronics, Inc."),
    (*b"CEM", "MEC Electronics GmbH"),
    (*b"CEN", "Centurion Technologies P/L"),
    (*b"CEP", "C-DAC"),
    (*b"CER", "Ceronix"),
    (*b"CET", "TEC CORPORATION"),
    (*b"CFG", "Atlantis"),
    (*b"CGA", "Chunghwa Picture Tubes, LTD"),
    (*b"CGS", "Chyron Corp"),
    (*b"CGT", "congatec AG"),
    (*b"CHA", "Chase Research PLC"),
    (*b"CHC", "Chic Technology Corp."),
    (*b"CHD", "ChangHong Electric Co.,Ltd"),
    (*b"CHE", "Acer Inc"),
    (*b"CHG", "Sichuan Changhong Electric CO, LTD."),
    (*b"CHI", "Chrontel Inc"),
    (*b"CHL", "Chloride-R&D"),
    (*b"CHM", "CHIC TECHNOLOGY CORP."),
    (*b"CHO", "Sichuang Changhong Corporation"),
    (*b"CHP", "CH Products"),
    (*b"CHR", "christmann informationstechnik + medien GmbH & Co. KG"),
    (*b"CHS", "Agentur Chairos"),
    (*b"CHT", "Chunghwa Picture Tubes,LTD."),
    (*b"CHY", "Cherry GmbH"),
    (*b"CIC", "Comm. Intelligence Corporation"),
    (*b"CII", "Cromack Industries Inc"),
    (*b"CIL", "Citicom Infotech Private Limited"),
    (*b"CIN", "Citron GmbH"),
    (*b"CIP", "Ciprico Inc"),
    (*b"CIR", "Cirrus Logic Inc"),
    (*b"CIS", "Cisco Systems Inc"),
    (*b"CIT", "Citifax Limited"),
    (*b"CKJ", "Carina System Co., Ltd."),
    (*b"CLA", "Clarion Company Ltd"),
    (*b"CLD", "COMMAT L.t.d."),
    (*b"CLE", "Classe Audio"),
    (*b"CLG", "CoreLogic"),
    (*b"CLI", "Cirrus Logic Inc"),
    (*b"CLM", "CrystaLake Multimedia"),
    (*b"CLO", "Clone Computers"),
    (*b"CLT", "automated computer control systems"),
    (*b"CLV", "Clevo Company"),
    (*b"CLX", "CardLogix"),
    (*b"CMC", "CMC Ltd"),
    (*b"CMD", "Colorado MicroDisplay, Inc."),
    (*b"CMG", "Chenming Mold Ind. Corp."),
    (*b"CMI", "C-Media Electronics"),
    (*b"CMM", "Comtime GmbH"),
    (*b"CMN", "Chimei Innolux Corporation"),
    (*b"CMO", "Chi Mei Optoelectronics corp."),
    (*b"CMR", "Cambridge Research Systems Ltd"),
    (*b"CMS", "CompuMaster Srl"),
    (*b"CMX", "Comex Electronics AB"),
    (*b"CNB", "American Power Conversion"),
    (*b"CNC", "Alvedon Computers Ltd"),
    (*b"CNE", "Cine-tal"),
    (*b"CNI", "Connect Int'l A/S"),
    (*b"CNN", "Canon Inc"),
    (*b"CNT", "COINT Multimedia Systems"),
    (*b"COB", "COBY Electronics Co., Ltd"),
    (*b"COD", "CODAN Pty. Ltd."),
    (*b"COI", "Codec Inc."),
    (*b"COL", "Rockwell Collins, Inc."),
    (*b"COM", "Comtrol Corporation"),
    (*b"CON", "Contec Company Ltd"),
    (*b"COO", "coolux GmbH"),
    (*b"COR", "Corollary Inc"),
    (*b"COS", "CoStar Corporation"),
    (*b"COT", "Core Technology Inc"),
    (*b"COW", "Polycow Productions"),
    (*b"COX", "Comrex"),
    (*b"CPC", "Ciprico Inc"),
    (*b"CPD", "CompuAdd"),
    (*b"CPI", "Computer Peripherals Inc"),
    (*b"CPL", "Compal Electronics Inc"),
    (*b"CPM", "Capella Microsystems Inc."),
    (*b"CPQ", "Compaq Computer Company"),
    (*b"CPT", "Chunghwa Picture Tubes, Ltd."),
    (*b"CPX", "Powermatic Data Systems"),
    (*b"CRC", "CONRAC GmbH"),
    (*b"CRD", "Cardinal Technical Inc"),
    (*b"CRE", "Creative Labs Inc"),
    (*b"CRH", "Contemporary Research Corp."),
    (*b"CRI", "Crio Inc."),
    (*b"CRL", "Creative Logic"),
    (*b"CRN", "Cornerstone Imaging"),
    (*b"CRO", "Extraordinary Technologies PTY Limited"),
    (*b"CRQ", "Cirque Corporation"),
    (*b"CRS", "Crescendo Communication Inc"),
    (*b"CRV", "Cerevo Inc."),
    (*b"CRW", "Cammegh Limited"),
    (*b"CRX", "Cyrix Corporation"),
    (*b"CSB", "Transtex SA"),
    (*b"CSC", "Crystal Semiconductor"),
    (*b"CSD", "Cresta Systems Inc"),
    (*b"CSE", "Concept Solutions & Engineering"),
    (*b"CSI", "Cabletron System Inc"),
    (*b"CSM", "Cosmic Engineering Inc."),
    (*b"CSO", "California Institute of Technology"),
    (*b"CSS", "CSS Laboratories"),
    (*b"CST", "CSTI Inc"),
    (*b"CTA", "CoSystems Inc"),
    (*b"CTC", "CTC Communication Development Company Ltd"),
    (*b"CTE", "Chunghwa Telecom Co., Ltd."),
    (*b"CTL", "Creative Technology Ltd"),
    (*b"CTM", "Computerm Corporation"),
    (*b"CTN", "Computone Products"),
    (*b"CTP", "Computer Technology Corporation"),
    (*b"CTS", "Comtec Systems Co., Ltd."),
    (*b"CTV", "Changhong"),
    (*b"CTX", "Chuntex Electronic Co., Ltd."),
    (*b"CUB", "Cubix Corporation"),
    (*b"CUK", "Calibre UK Ltd"),
    (*b"CVA", "Covia Inc"),
    (*b"CVI", "Colorado Video, Inc."),
    (*b"CVS", "Clarity Visual Systems"),
    (*b"CWR", "Connectware Inc"),
    (*b"CXT", "Conexant Systems"),
    (*b"CYB", "CyberVision"),
    (*b"CYC", "Cylink Corporation"),
    (*b"CYD", "Cyclades Corporation"),
    (*b"CYL", "Cyberlabs"),
    (*b"CYT", "Cytechinfo Inc"),
    (*b"CYV", "Cyviz AS"),
    (*b"CYW", "Cyberware"),
    (*b"CYX", "Cyrix Corporation"),
    (*b"CZC", "Shenzhen ChuangZhiCheng Technology Co., Ltd."),
    (*b"CZE", "Carl Zeiss AG"),
    (*b"DAC", "Digital Acoustics Corporation"),
    (*b"DAE", "Digatron Industrie Elektronik GmbH"),
    (*b"DAI", "DAIS SET Ltd."),
    (*b"DAK", "Daktronics"),
    (*b"DAL", "Digital Audio Labs Inc"),
    (*b"DAN", "Danelec Marine A/S"),
    (*b"DAS", "DAVIS AS"),
    (*b"DAT", "Datel Inc"),
    (*b"DAU", "Daou Tech Inc"),
    (*b"DAV", "Davicom Semiconductor Inc"),
    (*b"DAW", "DA2 Technologies Inc"),
    (*b"DAX", "Data Apex Ltd"),
    (*b"DBD", "Diebold Inc."),
    (*b"DBI", "DigiBoard Inc"),
    (*b"DBK", "Databook Inc"),
    (*b"DBL", "Doble Engineering Company"),
    (*b"DBN", "DB Networks Inc"),
    (*b"DCA", "Digital Communications Association"),
    (*b"DCC", "Dale Computer Corporation"),
    (*b"DCD", "Datacast LLC"),
    (*b"DCE", "dSPACE GmbH"),
    (*b"DCI", "Concepts Inc"),
    (*b"DCL", "Dynamic Controls Ltd"),
    (*b"DCM", "DCM Data Products"),
    (*b"DCO", "Dialogue Technology Corporation"),
    (*b"DCR", "Decros Ltd"),
    (*b"DCS", "Diamond Computer Systems Inc"),
    (*b"DCT", "Dancall Telecom A/S"),
    (*b"DCV", "Datatronics Technology Inc"),
    (*b"DDA", "DA2 Technologies Corporation"),
    (*b"DDD", "Danka Data Devices"),
    (*b"DDE", "Datasat Digital Entertainment"),
    (*b"DDI", "Data Display AG"),
    (*b"DDS", "Barco, n.v."),
    (*b"DDT", "Datadesk Technologies Inc"),
    (*b"DDV", "Delta Information Systems, Inc"),
    (*b"DEC", "Digital Equipment Corporation"),
    (*b"DEI", "Deico Electronics"),
    (*b"DEL", "Dell Inc."),
    (*b"DEN", "Densitron Computers Ltd"),
    (*b"DEX", "idex displays"),
    (*b"DFI", "DFI"),
    (*b"DFK", "SharkTec A/S"),
    (*b"DFT", "DEI Holdings dba Definitive Technology"),
    (*b"DGA", "Digiital Arts Inc"),
    (*b"DGC", "Data General Corporation"),
    (*b"DGI", "DIGI International"),
    (*b"DGK", "DugoTech Co., LTD"),
    (*b"DGP", "Digicorp European sales S.A."),
    (*b"DGS", "Diagsoft Inc"),
    (*b"DGT", "The Dearborn Group"),
    (*b"DHP", "DH Print"),
    (*b"DHQ", "Quadram"),
    (*b"DHT", "Projectavision Inc"),
    (*b"DIA", "Diadem"),
    (*b"DIG", "Digicom S.p.A."),
    (*b"DII", "Dataq Instruments Inc"),
    (*b"DIM", "dPict Imaging, Inc."),
    (*b"DIN", "Daintelecom Co., Ltd"),
    (*b"DIS", "Diseda S.A."),
    (*b"DIT", "Dragon Information Technology"),
    (*b"DJE", "Capstone Visual Product Development"),
    (*b"DJP", "Maygay Machines, Ltd"),
    (*b"DKY", "Datakey Inc"),
    (*b"DLB", "Dolby Laboratories Inc."),
    (*b"DLC", "Diamond Lane Comm. Corporation"),
    (*b"DLG", "Digital-Logic GmbH"),
    (*b"DLK", "D-Link Systems Inc"),
    (*b"DLL", "Dell Inc"),
    (*b"DLT", "Digitelec Informatique Park Cadera"),
    (*b"DMB", "Digicom Systems Inc"),
    (*b"DMC", "Dune Microsystems Corporation"),
    (*b"DMM", "Dimond Multimedia Systems Inc"),
    (*b"DMP", "D&M Holdings Inc, Professional Business Company"),
    (*b"DMS", "DOME imaging systems"),
    (*b"DMT", "Distributed Management Task Force, Inc. (DMTF)"),
    (*b"DMV", "NDS Ltd"),
    (*b"DNA", "DNA Enterprises, Inc."),
    (*b"DNG", "Apache Micro Peripherals Inc"),
    (*b"DNI", "Deterministic Networks Inc."),
    (*b"DNT", "Dr. Neuhous Telekommunikation GmbH"),
    (*b"DNV", "DiCon"),
    (*b"DOL", "Dolman Technologies Group Inc"),
    (*b"DOM", "Dome Imaging Systems"),
    (*b"DON", "DENON, Ltd."),
    (*b"DOT", "Dotronic Mikroelektronik GmbH"),
    (*b"DPA", "DigiTalk Pro AV"),
    (*b"DPC", "Delta Electronics Inc"),
    (*b"DPI", "DocuPoint"),
    (*b"DPL", "Digital Projection Limited"),
    (*b"DPM", "ADPM Synthesis sas"),
    (*b"DPS", "Digital Processing Systems"),
    (*b"DPT", "DPT"),
    (*b"DPX", "DpiX, Inc."),
    (*b"DQB", "Datacube Inc"),
    (*b"DRB", "Dr. Bott KG"),
    (*b"DRC", "Data Ray Corp."),
    (*b"DRD", "DIGITAL REFLECTION INC."),
    (*b"DRI", "Data Race Inc"),
    (*b"DRS", "DRS Defense Solutions, LLC"),
    (*b"DSD", "DS Multimedia Pte Ltd"),
    (*b"DSI", "Digitan Systems Inc"),
    (*b"DSM", "DSM Digital Services GmbH"),
    (*b"DSP", "Domain Technology Inc"),
    (*b"DTA", "DELTATEC"),
    (*b"DTC", "DTC Tech Corporation"),
    (*b"DTE", "Dimension Technologies, Inc."),
    (*b"DTI", "Diversified Technology, Inc."),
    (*b"DTK", "Dynax Electronics (HK) Ltd"),
    (*b"DTL", "e-Net Inc"),
    (*b"DTN", "Datang  Telephone Co"),
    (*b"DTO", "Deutsche Thomson OHG"),
    (*b"DTT", "Design & Test Technology, Inc."),
    (*b"DTX", "Data Translation"),
    (*b"DUA", "Dosch & Amand GmbH & Company KG"),
    (*b"DUN", "NCR Corporation"),
    (*b"DVD", "Dictaphone Corporation"),
    (*b"DVL", "Devolo AG"),
    (*b"DVS", "Digital Video System"),
    (*b"DVT", "Data Video"),
    (*b"DWE", "Daewoo Electronics Company Ltd"),
    (*b"DXC", "Digipronix Control Systems"),
    (*b"DXD", "DECIMATOR DESIGN PTY LTD"),
    (*b"DXL", "Dextera Labs Inc"),
    (*b"DXP", "Data Expert Corporation"),
    (*b"DXS", "Signet"),
    (*b"DYC", "Dycam Inc"),
    (*b"DYM", "Dymo-CoStar Corporation"),
    (*b"DYN", "Askey Computer Corporation"),
    (*b"DYX", "Dynax Electronics (HK) Ltd"),
    (*b"EAS", "Evans and Sutherland Computer"),
    (*b"EBH", "Data Price Informatica"),
    (*b"EBT", "HUALONG TECHNOLOGY CO., LTD"),
    (*b"ECA", "Electro Cam Corp."),
    (*b"ECC", "ESSential Comm. Corporation"),
    (*b"ECI", "Enciris Technologies"),
    (*b"ECK", "Eugene Chukhlomin Sole Proprietorship, d.b.a."),
    (*b"ECL", "Excel Company Ltd"),
    (*b"ECM", "E-Cmos Tech Corporation"),
    (*b"ECO", "Echo Speech Corporation"),
    (*b"ECP", "Elecom Company Ltd"),
    (*b"ECS", "ELITEGROUP Computer Systems"),
    (*b"EDC", "e.Digital Corporation"),
    (*b"EDG", "Electronic-Design GmbH"),
    (*b"EDI", "Edimax Tech. Company Ltd"),
    (*b"EDM", "EDMI"),
    (*b"EDT", "Emerging Display Technologies Corp"),
    (*b"EEE", "ET&T Technology Company Ltd"),
    (*b"EEH", "EEH Datalink GmbH"),
    (*b"EEP", "E.E.P.D. GmbH"),
    (*b"EES", "EE Solutions, Inc."),
    (*b"EGA", "Elgato Systems LLC"),
    (*b"EGD", "EIZO GmbH Display Technologies"),
    (*b"EGL", "Eagle Technology"),
    (*b"EGN", "Egenera, Inc."),
    (*b"EGO", "Ergo Electronics"),
    (*b"EHJ", "Epson Research"),
    (*b"EHN", "Enhansoft"),
    (*b"EIC", "Eicon Technology Corporation"),
    (*b"EIZ", "EIZO GmbH Display Technologies"),
    (*b"EKA", "MagTek Inc."),
    (*b"EKC", "Eastman Kodak Company"),
    (*b"EKS", "EKSEN YAZILIM"),
    (*b"ELA", "ELAD srl"),
    (*b"ELC", "Electro Scientific Ind"),
    (*b"ELE", "Elecom Company Ltd"),
    (*b"ELG", "Elmeg GmbH Kommunikationstechnik"),
    (*b"ELI", "Edsun Laboratories"),
    (*b"ELL", "Electrosonic Ltd"),
    (*b"ELM", "Elmic Systems Inc"),
    (*b"ELO", "Elo TouchSystems Inc"),
    (*b"ELS", "ELSA GmbH"),
    (*b"ELT", "Element Labs, Inc."),
    (*b"ELX", "Elonex PLC"),
    (*b"EMA", "Emachines Inc"),
    (*b"EMB", "Embedded computing inc ltd"),
    (*b"EMC", "eMicro Corporation"),
    (*b"EME", "EMiNE TECHNOLOGY COMPANY, LTD."),
    (*b"EMG", "EMG Consultants Inc"),
    (*b"EMI", "Ex Machina Inc"),
    (*b"EMK", "Emcore Corporation"),
    (*b"EMO", "ELMO COMPANY, LIMITED"),
    (*b"EMU", "Emulex Corporation"),
    (*b"ENC", "Eizo Nanao Corporation"),
    (*b"END", "ENIDAN Technologies Ltd"),
    (*b"ENE", "ENE Technology Inc."),
    (*b"ENI", "Efficient Networks"),
    (*b"ENS", "Ensoniq Corporation"),
    (*b"ENT", "Enterprise Comm. & Computing Inc"),
    (*b"ENV", "Envision Peripherals, Inc"),
    (*b"EPC", "Empac"),
    (*b"EPH", "Epiphan Systems Inc."),
    (*b"EPI", "Envision Peripherals, Inc"),
    (*b"EPN", "EPiCON Inc."),
    (*b"EPO", "Epox Computer Co., Ltd."),
    (*b"EPS", "KEPS"),
    (*b"EQP", "Equipe Electronics Ltd."),
    (*b"EQX", "Equinox Systems Inc"),
    (*b"ERG", "Ergo System"),
    (*b"ERI", "Ericsson Mobile Communications AB"),
    (*b"ERN", "Ericsson, Inc."),
    (*b"ERP", "Euraplan GmbH"),
    (*b"ERS", "Eizo Rugged Solutions"),
    (*b"ERT", "Escort Insturments Corporation"),
    (*b"ESA", "Elbit Systems of America"),
    (*b"ESB", "Esterline Belgium BVBA"),
    (*b"ESC", "Eden Sistemas de Computacao S/A"),
    (*b"ESD", "Ensemble Designs, Inc"),
    (*b"ESG", "ELCON Systemtechnik GmbH"),
    (*b"ESI", "Extended Systems, Inc."),
    (*b"ESK", "ES&S"),
    (*b"ESL", "Esterline Technologies"),
    (*b"ESN", "eSATURNUS"),
    (*b"ESS", "ESS Technology Inc"),
    (*b"EST", "Embedded Solution Technology"),
    (*b"ESY", "E-Systems Inc"),
    (*b"ETC", "Everton Technology Company Ltd"),
    (*b"ETD", "ELAN MICROELECTRONICS CORPORATION"),
    (*b"ETH", "Etherboot Project"),
    (*b"ETI", "Eclipse Tech Inc"),
    (*b"ETK", "eTEK Labs Inc."),
    (*b"ETL", "Evertz Microsystems Ltd."),
    (*b"ETS", "Electronic Trade Solutions Ltd"),
    (*b"ETT", "E-Tech Inc"),
    (*b"EUT", "Ericsson Mobile Networks B.V."),
    (*b"EVE", "Advanced Micro Peripherals Ltd"),
    (*b"EVI", "eviateg GmbH"),
    (*b"EVX", "Everex"),
    (*b"EXA", "Exabyte"),
    (*b"EXC", "Excession Audio"),
    (*b"EXI", "Exide Electronics"),
    (*b"EXN", "RGB Systems, Inc. dba Extron Electronics"),
    (*b"EXP", "Data Export Corporation"),
    (*b"EXT", "Exatech Computadores & Servicos Ltda"),
    (*b"EXX", "Exxact GmbH"),
    (*b"EXY", "Exterity Ltd"),
    (*b"EYE", "eyevis GmbH"),
    (*b"EYF", "eyefactive Gmbh"),
    (*b"EZE", "EzE Technologies"),
    (*b"EZP", "Storm Technology"),
    (*b"FAN", "Fantalooks Co., Ltd."),
    (*b"FAR", "Farallon Computing"),
    (*b"FBI", "Interface Corporation"),
    (*b"FCB", "Furukawa Electric Company Ltd"),
    (*b"FCG", "First International Computer Ltd"),
    (*b"FCM", "Funai Electric Company of Taiwan"),
    (*b"FCS", "Focus Enhancements, Inc."),
    (*b"FDC", "Future Domain"),
    (*b"FDD", "Forth Dimension Displays Ltd"),
    (*b"FDI", "Future Designs, Inc."),
    (*b"FDT", "Fujitsu Display Technologies Corp."),
    (*b"FEC", "FURUNO ELECTRIC CO., LTD."),
    (*b"FEL", "Fellowes & Questec"),
    (*b"FEN", "Fen Systems Ltd."),
    (*b"FER", "Ferranti Int'L"),
    (*b"FFC", "FUJIFILM Corporation"),
    (*b"FFI", "Fairfield Industries"),
    (*b"FGD", "Lisa Draexlmaier GmbH"),
    (*b"FGL", "Fujitsu General Limited."),
    (*b"FHL", "FHLP"),
    (*b"FIC", "Formosa Industrial Computing Inc"),
    (*b"FIL", "Forefront Int'l Ltd"),
    (*b"FIN", "Finecom Co., Ltd."),
    (*b"FIR", "Chaplet Systems Inc"),
    (*b"FIS", "FLY-IT Simulators"),
    (*b"FIT", "Feature Integration Technology Inc."),
    (*b"FJC", "Fujitsu Takamisawa Component Limited"),
    (*b"FJS", "Fujitsu Spain"),
    (*b"FJT", "F.J. Tieman BV"),
    (*b"FLE", "ADTI Media, Inc"),
    (*b"FLI", "Faroudja Laboratories"),
    (*b"FLY", "Butterfly Communications"),
    (*b"FMA", "Fast Multimedia AG"),
    (*b"FMC", "Ford Microelectronics Inc"),
    (*b"FMI", "Fujitsu Microelect Inc"),
    (*b"FML", "Fujitsu Microelect Ltd"),
    (*b"FMZ", "Formoza-Altair"),
    (*b"FNC", "Fanuc LTD"),
    (*b"FNI", "Funai Electric Co., Ltd."),
    (*b"FOA", "FOR-A Company Limited"),
    (*b"FOK", "Fokus Technologies GmbH"),
    (*b"FOS", "Foss Tecator"),
    (*b"FOX", "HON HAI PRECISON IND.CO.,LTD."),
    (*b"FPE", "Fujitsu Peripherals Ltd"),
    (*b"FPS", "Deltec Corporation"),
    (*b"FPX", "Cirel Systemes"),
    (*b"FRC", "Force Computers"),
    (*b"FRD", "Freedom Scientific BLV"),
    (*b"FRE", "Forvus Research Inc"),
    (*b"FRI", "Fibernet Research Inc"),
    (*b"FRO", "FARO Technologies"),
    (*b"FRS", "South Mountain Technologies, LTD"),
    (*b"FSC", "Future Systems Consulting KK"),
    (*b"FSI", "Fore Systems Inc"),
    (*b"FST", "Modesto PC Inc"),
    (*b"FTC", "Futuretouch Corporation"),
    (*b"FTE", "Frontline Test Equipment Inc."),
    (*b"FTG", "FTG Data Systems"),
    (*b"FTI", "FastPoint Technologies, Inc."),
    (*b"FTL", "FUJITSU TEN LIMITED"),
    (*b"FTN", "Fountain Technologies Inc"),
    (*b"FTR", "Mediasonic"),
    (*b"FTS", "FocalTech Systems Co., Ltd."),
    (*b"FTW", "MindTribe Product Engineering, Inc."),
    (*b"FUJ", "Fujitsu Ltd"),
    (*b"FUN", "sisel muhendislik"),
    (*b"FUS", "Fujitsu Siemens Computers GmbH"),
    (*b"FUT", "Fujitsu Technology Solutions GmbH"),
    (*b"FWA", "Attero Tech, LLC"),
    (*b"FWR", "Flat Connections Inc"),
    (*b"FXX", "Fuji Xerox"),
    (*b"FZC", "Founder Group Shenzhen Co."),
    (*b"FZI", "FZI Forschungszentrum Informatik"),
    (*b"GAG", "Gage Applied Sciences Inc"),
    (*b"GAL", "Galil Motion Control"),
    (*b"GAU", "Gaudi Co., Ltd."),
    (*b"GBT", "GIGA-BYTE TECHNOLOGY CO., LTD."),
    (*b"GCC", "GCC Technologies Inc"),
    (*b"GCI", "Gateway Comm. Inc"),
    (*b"GCS", "Grey Cell Systems Ltd"),
    (*b"GDC", "General Datacom"),
    (*b"GDI", "G. Diehl ISDN GmbH"),
    (*b"GDS", "GDS"),
    (*b"GDT", "Vortex Computersysteme GmbH"),
    (*b"GEC", "Gechic Corporation"),
    (*b"GED", "General Dynamics C4 Systems"),
    (*b"GEF", "GE Fanuc Embedded Systems"),
    (*b"GEH", "Abaco Systems, Inc."),
    (*b"GEM", "Gem Plus"),
    (*b"GEN", "Genesys ATE Inc"),
    (*b"GEO", "GEO Sense"),
    (*b"GER", "GERMANEERS GmbH"),
    (*b"GES", "GES Singapore Pte Ltd"),
    (*b"GET", "Getac Technology Corporation"),
    (*b"GFM", "GFMesstechnik GmbH"),
    (*b"GFN", "Gefen Inc."),
    (*b"GGL", "Google Inc."),
    (*b"GGT", "G2TOUCH KOREA"),
    (*b"GIC", "General Inst. Corporation"),
    (*b"GIG", "GIGA-BYTE TECHNOLOGY CO., LTD."),
    (*b"GIM", "Guillemont International"),
    (*b"GIP", "GI Provision Ltd"),
    (*b"GIS", "AT&T Global Info Solutions"),
    (*b"GJN", "Grand Junction Networks"),
    (*b"GLD", "Goldmund - Digital Audio SA"),
    (*b"GLE", "AD electronics"),
    (*b"GLM", "Genesys Logic"),
    (*b"GLS", "Gadget Labs LLC"),
    (*b"GMK", "GMK Electronic Design GmbH"),
    (*b"GML", "General Information Systems"),
    (*b"GMM", "GMM Research Inc"),
    (*b"GMN", "GEMINI 2000 Ltd"),
    (*b"GMX", "GMX Inc"),
    (*b"GND", "Gennum Corporation"),
    (*b"GNN", "GN Nettest Inc"),
    (*b"GNZ", "Gunze Ltd"),
    (*b"GPR", "GoPro, Inc."),
    (*b"GRA", "Graphica Computer"),
    (*b"GRE", "GOLD RAIN ENTERPRISES CORP."),
    (*b"GRH", "Granch Ltd"),
    (*b"GRM", "Garmin International"),
    (*b"GRV", "Advanced Gravis"),
    (*b"GRY", "Robert Gray Company"),
    (*b"GSB", "NIPPONDENCHI CO,.LTD"),
    (*b"GSC", "General Standards Corporation"),
    (*b"GSM", "Goldstar Company Ltd"),
    (*b"GST", "Graphic SystemTechnology"),
    (*b"GSY", "Grossenbacher Systeme AG"),
    (*b"GTC", "Graphtec Corporation"),
    (*b"GTI", "Goldtouch"),
    (*b"GTK", "G-Tech Corporation"),
    (*b"GTM", "Garnet System Company Ltd"),
    (*b"GTS", "Geotest Marvin Test Systems Inc"),
    (*b"GTT", "General Touch Technology Co., Ltd."),
    (*b"GUD", "Guntermann & Drunck GmbH"),
    (*b"GUZ", "Guzik Technical Enterprises"),
    (*b"GVC", "GVC Corporation"),
    (*b"GVL", "Global Village Communication"),
    (*b"GWI", "GW Instruments"),
    (*b"GWK", "Gateworks Corporation"),
    (*b"GWY", "Gateway 2000"),
    (*b"GZE", "GUNZE Limited"),
    (*b"HAE", "Haider electronics"),
    (*b"HAI", "Haivision Systems Inc."),
    (*b"HAL", "Halberthal"),
    (*b"HAN", "Hanchang System Corporation"),
    (*b"HAR", "Harris Corporation"),
    (*b"HAY", "Hayes Microcomputer Products Inc"),
    (*b"HCA", "DAT"),
    (*b"HCE", "Hitachi Consumer Electronics Co., Ltd"),
    (*b"HCL", "HCL America Inc"),
    (*b"HCM", "HCL Peripherals"),
    (*b"HCP", "Hitachi Computer Products Inc"),
    (*b"HCW", "Hauppauge Computer Works Inc"),
    (*b"HDC", "HardCom Elektronik & Datateknik"),
    (*b"HDI", "HD-INFO d.o.o."),
    (*b"HDV", "Holografika kft."),
    (*b"HEC", "Hisense Electric Co., Ltd."),
    (*b"HEI", "Hyundai Electronics Industries Co., Ltd."),
    (*b"HEL", "Hitachi Micro Systems Europe Ltd"),
    (*b"HER", "Ascom Business Systems"),
    (*b"HET", "HETEC Datensysteme GmbH"),
    (*b"HHC", "HIRAKAWA HEWTECH CORP."),
    (*b"HHI", "Fraunhofer Heinrich-Hertz-Institute"),
    (*b"HIB", "Hibino Corporation"),
    (*b"HIC", "Hitachi Information Technology Co., Ltd."),
    (*b"HIK", "Hikom Co., Ltd."),
    (*b"HIL", "Hilevel Technology"),
    (*b"HIQ", "Kaohsiung Opto Electronics Americas, Inc."),
    (*b"HIS", "Hisense Electric Co., Ltd."),
    (*b"HIT", "Hitachi America Ltd"),
    (*b"HJI", "Harris & Jeffries Inc"),
    (*b"HKA", "HONKO MFG. CO., LTD."),
    (*b"HKC", "HKC OVERSEAS LIMITED"),
    (*b"HKG", "Josef Heim KG"),
    (*b"HMC", "Hualon Microelectric Corporation"),
    (*b"HMK", "hmk Daten-System-Technik BmbH"),
    (*b"HMX", "HUMAX Co., Ltd."),
    (*b"HNS", "Hughes Network Systems"),
    (*b"HOB", "HOB Electronic GmbH"),
    (*b"HOE", "Hosiden Corporation"),
    (*b"HOL", "Holoeye Photonics AG"),
    (*b"HON", "Sonitronix"),
    (*b"HPA", "Zytor Communications"),
    (*b"HPC", "Hewlett-Packard Co."),
    (*b"HPD", "Hewlett Packard"),
    (*b"HPE", "Hewlett Packard Enterprise"),
    (*b"HPI", "Headplay, Inc."),
    (*b"HPK", "HAMAMATSU PHOTONICS K.K."),
    (*b"HPN", "HP Inc."),
    (*b"HPQ", "Hewlett-Packard Co."),
    (*b"HPR", "H.P.R. Electronics GmbH"),
    (*b"HRC", "Hercules"),
    (*b"HRE", "Qingdao Haier Electronics Co., Ltd."),
    (*b"HRI", "Hall Research"),
    (*b"HRL", "Herolab GmbH"),
    (*b"HRS", "Harris Semiconductor"),
    (*b"HRT", "HERCULES"),
    (*b"HSC", "Hagiwara Sys-Com Company Ltd"),
    (*b"HSD", "HannStar Display Corp"),
    (*b"HSL", "Hansol Electronics"),
    (*b"HSM", "AT&T Microelectronics"),
    (*b"HSP", "HannStar Display Corp"),
    (*b"HST", "Horsent Technology Co., Ltd."),
    (*b"HTC", "Hitachi Ltd"),
    (*b"HTI", "Hampshire Company, Inc."),
    (*b"HTK", "Holtek Microelectronics Inc"),
    (*b"HTL", "HTBLuVA Mödling"),
    (*b"HTR", "Shenzhen ZhuoYi HengTong Computer Technology Limited"),
    (*b"HTX", "Hitex Systementwicklung GmbH"),
    (*b"HUB", "GAI-Tronics, A Hubbell Company"),
    (*b"HUK", "Hoffmann + Krippner GmbH"),
    (*b"HUM", "IMP Electronics Ltd."),
    (*b"HVR", "HTC Corportation"),
    (*b"HWA", "Harris Canada Inc"),
    (*b"HWC", "DBA Hans Wedemeyer"),
    (*b"HWD", "Highwater Designs Ltd"),
    (*b"HWP", "Hewlett Packard"),
    (*b"HWV", "Huawei Technologies Co., Inc."),
    (*b"HXM", "Hexium Ltd."),
    (*b"HYC", "Hypercope Gmbh Aachen"),
    (*b"HYD", "Hydis Technologies.Co.,LTD"),
    (*b"HYL", "Shanghai Chai Ming Huang Info&Tech Co, Ltd"),
    (*b"HYO", "HYC CO., LTD."),
    (*b"HYP", "Hyphen Ltd"),
    (*b"HYR", "Hypertec Pty Ltd"),
    (*b"HYT", "Heng Yu Technology (HK) Limited"),
    (*b"HYV", "Hynix Semiconductor"),
    (*b"IAD", "IAdea Corporation"),
    (*b"IAF", "Institut f r angewandte Funksystemtechnik GmbH"),
    (*b"IAI", "Integration Associates, Inc."),
    (*b"IAT", "IAT Germany GmbH"),
    (*b"IBC", "Integrated Business Systems"),
    (*b"IBI", "INBINE.CO.LTD"),
    (*b"IBM", "IBM France"),
    (*b"IBP", "IBP Instruments GmbH"),
    (*b"IBR", "IBR GmbH"),
    (*b"ICA", "ICA Inc"),
    (*b"ICC", "BICC Data Networks Ltd"),
    (*b"ICD", "ICD Inc"),
    (*b"ICE", "IC Ensemble"),
    (*b"ICI", "Infotek Communication Inc"),
    (*b"ICL", "Fujitsu ICL"),
    (*b"ICM", "Intracom SA"),
    (*b"ICN", "Sanyo Icon"),
    (*b"ICO", "Intel Corp"),
    (*b"ICP", "ICP Electronics, Inc./iEi Technology Corp."),
    (*b"ICS", "Integrated Circuit Systems"),
    (*b"ICV", "Inside Contactless"),
    (*b"ICX", "ICCC A/S"),
    (*b"IDC", "International Datacasting Corporation"),
    (*b"IDE", "IDE Associates"),
    (*b"IDK", "IDK Corporation"),
    (*b"IDN", "Idneo Technologies"),
    (*b"IDO", "IDEO Product Development"),
    (*b"IDP", "Integrated Device Technology, Inc."),
    (*b"IDS", "Interdigital Sistemas de Informacao"),
    (*b"IDT", "International Display Technology"),
    (*b"IDX", "IDEXX Labs"),
    (*b"IEC", "Interlace Engineering Corporation"),
    (*b"IEE", "IEE"),
    (*b"IEI", "Interlink Electronics"),
    (*b"IFS", "In Focus Systems Inc"),
    (*b"IFT", "Informtech"),
    (*b"IFX", "Infineon Technologies AG"),
    (*b"IFZ", "Infinite Z"),
    (*b"IGC", "Intergate Pty Ltd"),
    (*b"IGM", "IGM Communi"),
    (*b"IHE", "InHand Electronics"),
    (*b"IIC", "ISIC Innoscan Industrial Computers A/S"),
    (*b"III", "Intelligent Instrumentation"),
    (*b"IIN", "IINFRA Co., Ltd"),
    (*b"IKE", "Ikegami Tsushinki Co. Ltd."),
    (*b"IKS", "Ikos Systems Inc"),
    (*b"ILC", "Image Logic Corporation"),
    (*b"ILS", "Innotech Corporation"),
    (*b"IMA", "Imagraph"),
    (*b"IMB", "ART s.r.l."),
    (*b"IMC", "IMC Networks"),
    (*b"IMD", "ImasDe Canarias S.A."),
    (*b"IME", "Imagraph"),
    (*b"IMG", "IMAGENICS Co., Ltd."),
    (*b"IMI", "International Microsystems Inc"),
    (*b"IMM", "Immersion Corporation"),
    (*b"IMN", "Impossible Production"),
    (*b"IMP", "Impinj"),
    (*b"IMT", "Inmax Technology Corporation"),
    (*b"INA", "Inventec Corporation"),
    (*b"INC", "Home Row Inc"),
    (*b"IND", "ILC"),
    (*b"INE", "Inventec Electronics (M) Sdn. Bhd."),
    (*b"INF", "Inframetrics Inc"),
    (*b"ING", "Integraph Corporation"),
    (*b"INI", "Initio Corporation"),
    (*b"INK", "Indtek Co., Ltd."),
    (*b"INL", "InnoLux Display Corporation"),
    (*b"INM", "InnoMedia Inc"),
    (*b"INN", "Innovent Systems, Inc."),
    (*b"INO", "Innolab Pte Ltd"),
    (*b"INP", "Interphase Corporation"),
    (*b"INS", "Ines GmbH"),
    (*b"INT", "Interphase Corporation"),
    (*b"INU", "Inovatec S.p.A."),
    (*b"INV", "Inviso, Inc."),
    (*b"INX", "Communications Supply Corporation (A division of WESCO)"),
    (*b"INZ", "Best Buy"),
    (*b"IOA", "CRE Technology Corporation"),
    (*b"IOD", "I-O Data Device Inc"),
    (*b"IOM", "Iomega"),
    (*b"ION", "Inside Out Networks"),
    (*b"IOS", "i-O Display System"),
    (*b"IOT", "I/OTech Inc"),
    (*b"IPC", "IPC Corporation"),
    (*b"IPD", "Industrial Products Design, Inc."),
    (*b"IPI", "Intelligent Platform Management Interface (IPMI) forum (Intel, HP, NEC, Dell)"),
    (*b"IPM", "IPM Industria Politecnica Meridionale SpA"),
    (*b"IPN", "Performance Technologies"),
    (*b"IPP", "IP Power Technologies GmbH"),
    (*b"IPR", "Ithaca Peripherals"),
    (*b"IPS", "IPS, Inc. (Intellectual Property Solutions, Inc.)"),
    (*b"IPT", "International Power Technologies"),
    (*b"IPW", "IPWireless, Inc"),
    (*b"IQI", "IneoQuest Technologies, Inc"),
    (*b"IQT", "IMAGEQUEST Co., Ltd"),
    (*b"IRD", "IRdata"),
    (*b"ISA", "Symbol Technologies"),
    (*b"ISC", "Id3 Semiconductors"),
    (*b"ISG", "Insignia Solutions Inc"),
    (*b"ISI", "Interface Solutions"),
    (*b"ISL", "Isolation Systems"),
    (*b"ISM", "Image Stream Medical"),
    (*b"ISP", "IntreSource Systems Pte Ltd"),
    (*b"ISR", "INSIS Co., LTD."),
    (*b"ISS", "ISS Inc"),
    (*b"IST", "Intersolve Technologies"),
    (*b"ISY", "International Integrated Systems,Inc.(IISI)"),
    (*b"ITA", "Itausa Export North America"),
    (*b"ITC", "Intercom Inc"),
    (*b"ITD", "Internet Technology Corporation"),
    (*b"ITE", "Integrated Tech Express Inc"),
    (*b"ITK", "ITK Telekommunikation AG"),
    (*b"ITL", "Inter-Tel"),
    (*b"ITM", "ITM inc."),
    (*b"ITP", "IT-PRO Consulting und Systemhaus GmbH"),
    (*b"ITR", "Infotronic America, Inc."),
    (*b"ITS", "IDTECH"),
    (*b"ITT", "I&T Telecom."),
    (*b"ITX", "integrated Technology Express Inc"),
    (*b"IUC", "ICSL"),
    (*b"IVI", "Intervoice Inc"),
    (*b"IVM", "Iiyama North America"),
    (*b"IVO", "InfoVision Optoelectronics (Kunshan) Co., Ltd."),
    (*b"IVR", "Inlife-Handnet Co., Ltd."),
    (*b"IVS", "Intevac Photonics Inc."),
    (*b"IWR", "Icuiti Corporation"),
    (*b"IWX", "Intelliworxx, Inc."),
    (*b"IXD", "Intertex Data AB"),
    (*b"JAC", "Astec Inc"),
    (*b"JAE", "Japan Aviation Electronics Industry, Limited"),
    (*b"JAS", "Janz Automationssysteme AG"),
    (*b"JAT", "Jaton Corporation"),
    (*b"JAZ", "Carrera Computer Inc"),
    (*b"JCE", "Jace Tech Inc"),
    (*b"JDI", "Japan Display Inc."),
    (*b"JDL", "Japan Digital Laboratory Co.,Ltd."),
    (*b"JEN", "N-Vision"),
    (*b"JET", "JET POWER TECHNOLOGY CO., LTD."),
    (*b"JFX", "Jones Futurex Inc"),
    (*b"JGD", "University College"),
    (*b"JIC", "Jaeik Information & Communication Co., Ltd."),
    (*b"JKC", "JVC KENWOOD Corporation"),
    (*b"JMT", "Micro Technical Company Ltd"),
    (*b"JPC", "JPC Technology Limited"),
    (*b"JPW", "Wallis Hamilton Industries"),
    (*b"JQE", "CNet Technical Inc"),
    (*b"JSD", "JS DigiTech, Inc"),
    (*b"JSI", "Jupiter Systems, Inc."),
    (*b"JSK", "SANKEN ELECTRIC CO., LTD"),
    (*b"JTS", "JS Motorsports"),
    (*b"JTY", "jetway security micro,inc"),
    (*b"JUK", "Janich & Klass Computertechnik GmbH"),
    (*b"JUP", "Jupiter Systems"),
    (*b"JVC", "JVC"),
    (*b"JWD", "Video International Inc."),
    (*b"JWL", "Jewell Instruments, LLC"),
    (*b"JWS", "JWSpencer & Co."),
    (*b"JWY", "Jetway Information Co., Ltd"),
    (*b"KAR", "Karna"),
    (*b"KBI", "Kidboard Inc"),
    (*b"KBL", "Kobil Systems GmbH"),
    (*b"KCD", "Chunichi Denshi Co.,LTD."),
    (*b"KCL", "Keycorp Ltd"),
    (*b"KDE", "KDE"),
    (*b"KDK", "Kodiak Tech"),
    (*b"KDM", "Korea Data Systems Co., Ltd."),
    (*b"KDS", "KDS USA"),
    (*b"KDT", "KDDI Technology Corporation"),
    (*b"KEC", "Kyushu Electronics Systems Inc"),
    (*b"KEM", "Kontron Embedded Modules GmbH"),
    (*b"KES", "Kesa Corporation"),
    (*b"KEU", "Kontron Europe GmbH"),
    (*b"KEY", "Key Tech Inc"),
    (*b"KFC", "SCD Tech"),
    (*b"KFE", "Komatsu Forest"),
    (*b"KFX", "Kofax Image Products"),
    (*b"KGL", "KEISOKU GIKEN Co.,Ltd."),
    (*b"KIS", "KiSS Technology A/S"),
    (*b"KMC", "Mitsumi Company Ltd"),
    (*b"KME", "KIMIN Electronics Co., Ltd."),
    (*b"KML", "Kensington Microware Ltd"),
    (*b"KNC", "Konica corporation"),
    (*b"KNX", "Nutech Marketing PTL"),
    (*b"KOA", "Konica corporation"),
    (*b"KOB", "Kobil Systems GmbH"),
    (*b"KOD", "Eastman Kodak Company"),
    (*b"KOE", "KOLTER ELECTRONIC"),
    (*b"KOL", "Kollmorgen Motion Technologies Group"),
    (*b"KOM", "Kontron GmbH"),
    (*b"KOP", "Kopin Corporation"),
    (*b"KOU", "KOUZIRO Co.,Ltd."),
    (*b"KOW", "KOWA Company,LTD."),
    (*b"KPC", "King Phoenix Company"),
    (*b"KRL", "Krell Industries Inc."),
    (*b"KRM", "Kroma Telecom"),
    (*b"KRY", "Kroy LLC"),
    (*b"KSC", "Kinetic Systems Corporation"),
    (*b"KSG", "KUPA China Shenzhen Micro Technology Co., Ltd. Gold Institute"),
    (*b"KSL", "Karn Solutions Ltd."),
    (*b"KSX", "King Tester Corporation"),
    (*b"KTC", "Kingston Tech Corporation"),
    (*b"KTD", "Takahata Electronics Co.,Ltd."),
    (*b"KTE", "K-Tech"),
    (*b"KTG", "Kayser-Threde GmbH"),
    (*b"KTI", "Konica Technical Inc"),
    (*b"KTK", "Key Tronic Corporation"),
    (*b"KTN", "Katron Tech Inc"),
    (*b"KUR", "Kurta Corporation"),
    (*b"KVA", "Kvaser AB"),
    (*b"KVX", "KeyView"),
    (*b"KWD", "Kenwood Corporation"),
    (*b"KYC", "Kyocera Corporation"),
    (*b"KYE", "KYE Syst Corporation"),
    (*b"KYK", "Samsung Electronics America Inc"),
    (*b"KZI", "K-Zone International co. Ltd."),
    (*b"KZN", "K-Zone International"),
    (*b"LAB", "ACT Labs Ltd"),
    (*b"LAC", "LaCie"),
    (*b"LAF", "Microline"),
    (*b"LAG", "Laguna Systems"),
    (*b"LAN", "Sodeman Lancom Inc"),
    (*b"LAS", "LASAT Comm. A/S"),
    (*b"LAV", "Lava Computer MFG Inc"),
    (*b"LBO", "Lubosoft"),
    (*b"LCC", "LCI"),
    (*b"LCD", "Toshiba Matsushita Display Technology Co., Ltd"),
    (*b"LCE", "La Commande Electronique"),
    (*b"LCI", "Lite-On Communication Inc"),
    (*b"LCM", "Latitude Comm."),
    (*b"LCN", "LEXICON"),
    (*b"LCS", "Longshine Electronics Company"),
    (*b"LCT", "Labcal Technologies"),
    (*b"LDN", "Laserdyne Technologies"),
    (*b"LDT", "LogiDataTech Electronic GmbH"),
    (*b"LEC", "Lectron Company Ltd"),
    (*b"LED", "Long Engineering Design Inc"),
    (*b"LEG", "Legerity, Inc"),
    (*b"LEN", "Lenovo Group Limited"),
    (*b"LEO", "First International Computer Inc"),
    (*b"LEX", "Lexical Ltd"),
    (*b"LGC", "Logic Ltd"),
    (*b"LGD", "LG Display"),
    (*b"LGI", "Logitech Inc"),
    (*b"LGS", "LG Semicom Company Ltd"),
    (*b"LGX", "Lasergraphics, Inc."),
    (*b"LHA", "Lars Haagh ApS"),
    (*b"LHE", "Lung Hwa Electronics Company Ltd"),
    (*b"LHT", "Lighthouse Technologies Limited"),
    (*b"LIN", "Lenovo Beijing Co. Ltd."),
    (*b"LIP", "Linked IP GmbH"),
    (*b"LIT", "Lithics Silicon Technology"),
    (*b"LJX", "Datalogic Corporation"),
    (*b"LKM", "Likom Technology Sdn. Bhd."),
    (*b"LLL", "L-3 Communications"),
    (*b"LMG", "Lucent Technologies"),
    (*b"LMI", "Lexmark Int'l Inc"),
    (*b"LMP", "Leda Media Products"),
    (*b"LMT", "Laser Master"),
    (*b"LND", "Land Computer Company Ltd"),
    (*b"LNK", "Link Tech Inc"),
    (*b"LNR", "Linear Systems Ltd."),
    (*b"LNT", "LANETCO International"),
    (*b"LNV", "Lenovo"),
    (*b"LOC", "Locamation B.V."),
    (*b"LOE", "Loewe Opta GmbH"),
    (*b"LOG", "Logicode Technology Inc"),
    (*b"LOL", "Litelogic Operations Ltd"),
    (*b"LPE", "El-PUSK Co., Ltd."),
    (*b"LPI", "Design Technology"),
    (*b"LPL", "LG Philips"),
    (*b"LSC", "LifeSize Communications"),
    (*b"LSD", "Intersil Corporation"),
    (*b"LSI", "Loughborough Sound Images"),
    (*b"LSJ", "LSI Japan Company Ltd"),
    (*b"LSL", "Logical Solutions"),
    (*b"LSP", "Lightspace Technologies"),
    (*b"LSY", "LSI Systems Inc"),
    (*b"LTC", "Labtec Inc"),
    (*b"LTI", "Jongshine Tech Inc"),
    (*b"LTK", "Lucidity Technology Company Ltd"),
    (*b"LTN", "Lite-On"),
    (*b"LTS", "LTS Scale LLC"),
    (*b"LTV", "Leitch Technology International Inc."),
    (*b"LTW", "Lightware, Inc"),
    (*b"LUC", "Lucent Technologies"),
    (*b"LUM", "Lumagen, Inc."),
    (*b"LUX", "Luxxell Research Inc"),
    (*b"LVI", "LVI Low Vision International AB"),
    (*b"LWC", "Labway Corporation"),
    (*b"LWR", "Lightware Visual Engineering"),
    (*b"LWW", "Lanier Worldwide"),
    (*b"LXC", "LXCO Technologies AG"),
    (*b"LXN", "Luxeon"),
    (*b"LXS", "ELEA CardWare"),
    (*b"LZX", "LightZone Ltd"),
    (*b"MAC", "MAC System Company Ltd"),
    (*b"MAD", "Xedia Corporation"),
    (*b"MAE", "Maestro Pty Ltd"),
    (*b"MAG", "MAG InnoVision"),
    (*b"MAI", "Mutoh America Inc"),
    (*b"MAL", "Meridian Audio Ltd"),
    (*b"MAN", "LGIC"),
    (*b"MAS", "Mass Inc."),
    (*b"MAT", "Matsushita Electric Ind. Company Ltd"),
    (*b"MAX", "Belinea"),
    (*b"MAY", "Maynard Electronics"),
    (*b"MAZ", "MAZeT GmbH"),
    (*b"MBC", "MBC"),
    (*b"MBD", "Microbus PLC"),
    (*b"MBM", "Marshall Electronics"),
    (*b"MBV", "Moreton Bay"),
    (*b"MCA", "American Nuclear Systems Inc"),
    (*b"MCC", "Micro Industries"),
    (*b"MCD", "McDATA Corporation"),
    (*b"MCE", "Metz-Werke GmbH & Co KG"),
    (*b"MCG", "Motorola Computer Group"),
    (*b"MCI", "Micronics Computers"),
    (*b"MCL", "Motorola Communications Israel"),
    (*b"MCM", "Metricom Inc"),
    (*b"MCN", "Micron Electronics Inc"),
    (*b"MCO", "Motion Computing Inc."),
    (*b"MCP", "Magni Systems Inc"),
    (*b"MCQ", "Mat's Computers"),
    (*b"MCR", "Marina Communicaitons"),
    (*b"MCS", "Micro Computer Systems"),
    (*b"MCT", "Microtec"),
    (*b"MDA", "Media4 Inc"),
    (*b"MDC", "Midori Electronics"),
    (*b"MDD", "MODIS"),
    (*b"MDG", "Madge Networks"),
    (*b"MDI", "Micro Design Inc"),
    (*b"MDK", "Mediatek Corporation"),
    (*b"MDO", "Panasonic"),
    (*b"MDR", "Medar Inc"),
    (*b"MDS", "Micro Display Systems Inc"),
    (*b"MDT", "Magus Data Tech"),
    (*b"MDV", "MET Development Inc"),
    (*b"MDX", "MicroDatec GmbH"),
    (*b"MDY", "Microdyne Inc"),
    (*b"MEC", "Mega System Technologies Inc"),
    (*b"MED", "Messeltronik Dresden GmbH"),
    (*b"MEE", "Mitsubishi Electric Engineering Co., Ltd."),
    (*b"MEG", "Abeam Tech Ltd"),
    (*b"MEI", "Panasonic Industry Company"),
    (*b"MEJ", "Mac-Eight Co., LTD."),
    (*b"MEK", "Mediaedge Corporation"),
    (*b"MEL", "Mitsubishi Electric Corporation"),
    (*b"MEN", "MEN Mikroelectronik Nueruberg GmbH"),
    (*b"MEP", "Meld Technology"),
    (*b"MEQ", "Matelect Ltd."),
    (*b"MET", "Metheus Corporation"),
    (*b"MEU", "MPL AG, Elektronik-Unternehmen"),
    (*b"MEX", "MSC Vertriebs GmbH"),
    (*b"MFG", "MicroField Graphics Inc"),
    (*b"MFI", "Micro Firmware"),
    (*b"MFR", "MediaFire Corp."),
    (*b"MGA", "Mega System Technologies, Inc."),
    (*b"MGC", "Mentor Graphics Corporation"),
    (*b"MGE", "Schneider Electric S.A."),
    (*b"MGL", "M-G Technology Ltd"),
    (*b"MGT", "Megatech R & D Company"),
    (*b"MIC", "Micom Communications Inc"),
    (*b"MID", "miro Displays"),
    (*b"MII", "Mitec Inc"),
    (*b"MIL", "Marconi Instruments Ltd"),
    (*b"MIM", "Mimio – A Newell Rubbermaid Company"),
    (*b"MIN", "Minicom Digital Signage"),
    (*b"MIP", "micronpc.com"),
    (*b"MIR", "Miro Computer Prod."),
    (*b"MIS", "Modular Industrial Solutions Inc"),
    (*b"MIT", "MCM Industrial Technology GmbH"),
    (*b"MJI", "MARANTZ JAPAN, INC."),
    (*b"MJS", "MJS Designs"),
    (*b"MKC", "Media Tek Inc."),
    (*b"MKT", "MICROTEK Inc."),
    (*b"MKV", "Trtheim Technology"),
    (*b"MLD", "Deep Video Imaging Ltd"),
    (*b"MLG", "Micrologica AG"),
    (*b"MLI", "McIntosh Laboratory Inc."),
    (*b"MLM", "Millennium Engineering Inc"),
    (*b"MLN", "Mark Levinson"),
    (*b"MLS", "Milestone EPE"),
    (*b"MLX", "Mylex Corporation"),
    (*b"MMA", "Micromedia AG"),
    (*b"MMD", "Micromed Biotecnologia Ltd"),
    (*b"MMF", "Minnesota Mining and Manufacturing"),
    (*b"MMI", "Multimax"),
    (*b"MMM", "Electronic Measurements"),
    (*b"MMN", "MiniMan Inc"),
    (*b"MMS", "MMS Electronics"),
    (*b"MNC", "Mini Micro Methods Ltd"),
    (*b"MNL", "Monorail Inc"),
    (*b"MNP", "Microcom"),
    (*b"MOD", "Modular Technology"),
    (*b"MOM", "Momentum Data Systems"),
    (*b"MOS", "Moses Corporation"),
    (*b"MOT", "Motorola UDS"),
    (*b"MPC", "M-Pact Inc"),
    (*b"MPI", "Mediatrix Peripherals Inc"),
    (*b"MPJ", "Microlab"),
    (*b"MPL", "Maple Research Inst. Company Ltd"),
    (*b"MPN", "Mainpine Limited"),
    (*b"MPS", "mps Software GmbH"),
    (*b"MPX", "Micropix Technologies, Ltd."),
    (*b"MQP", "MultiQ Products AB"),
    (*b"MRA", "Miranda Technologies Inc"),
    (*b"MRC", "Marconi Simulation & Ty-Coch Way Training"),
    (*b"MRD", "MicroDisplay Corporation"),
    (*b"MRK", "Maruko & Company Ltd"),
    (*b"MRL", "Miratel"),
    (*b"MRO", "Medikro Oy"),
    (*b"MRT", "Merging Technologies"),
    (*b"MSA", "Micro Systemation AB"),
    (*b"MSC", "Mouse Systems Corporation"),
    (*b"MSD", "Datenerfassungs- und Informationssysteme"),
    (*b"MSF", "M-Systems Flash Disk Pioneers"),
    (*b"MSG", "MSI GmbH"),
    (*b"MSH", "Microsoft"),
    (*b"MSI", "Microstep"),
    (*b"MSK", "Megasoft Inc"),
    (*b"MSL", "MicroSlate Inc."),
    (*b"MSM", "Advanced Digital Systems"),
    (*b"MSP", "Mistral Solutions [P] Ltd."),
    (*b"MSR", "MASPRO DENKOH Corp."),
    (*b"MST", "MS Telematica"),
    (*b"MSU", "motorola"),
    (*b"MSV", "Mosgi Corporation"),
    (*b"MSX", "Micomsoft Co., Ltd."),
    (*b"MSY", "MicroTouch Systems Inc"),
    (*b"MTB", "Media Technologies Ltd."),
    (*b"MTC", "Mars-Tech Corporation"),
    (*b"MTD", "MindTech Display Co. Ltd"),
    (*b"MTE", "MediaTec GmbH"),
    (*b"MTH", "Micro-Tech Hearing Instruments"),
    (*b"MTI", "MaxCom Technical Inc"),
    (*b"MTJ", "MicroTechnica Co.,Ltd."),
    (*b"MTK", "Microtek International Inc."),
    (*b"MTL", "Mitel Corporation"),
    (*b"MTM", "Motium"),
    (*b"MTN", "Mtron Storage Technology Co., Ltd."),
    (*b"MTR", "Mitron computer Inc"),
    (*b"MTS", "Multi-Tech Systems"),
    (*b"MTU", "Mark of the Unicorn Inc"),
    (*b"MTX", "Matrox"),
    (*b"MUD", "Multi-Dimension Institute"),
    (*b"MUK", "mainpine limited"),
    (*b"MVD", "Microvitec PLC"),
    (*b"MVI", "Media Vision Inc"),
    (*b"MVM", "SOBO VISION"),
    (*b"MVN", "Meta Company"),
    (*b"MVR", "MediCapture, Inc."),
    (*b"MVS", "Microvision"),
    (*b"MVX", "COM 1"),
    (*b"MWI", "Multiwave Innovation Pte Ltd"),
    (*b"MWR", "mware"),
    (*b"MWY", "Microway Inc"),
    (*b"MXD", "MaxData Computer GmbH & Co.KG"),
    (*b"MXI", "Macronix Inc"),
    (*b"MXL", "Hitachi Maxell, Ltd."),
    (*b"MXP", "Maxpeed Corporation"),
    (*b"MXT", "Maxtech Corporation"),
    (*b"MXV", "MaxVision Corporation"),
    (*b"MYA", "Monydata"),
    (*b"MYR", "Myriad Solutions Ltd"),
    (*b"MYX", "Micronyx Inc"),
    (*b"NAC", "Ncast Corporation"),
    (*b"NAD", "NAD Electronics"),
    (*b"NAK", "Nakano Engineering Co.,Ltd."),
    (*b"NAL", "Network Alchemy"),
    (*b"NAN", "Nanao"),
    (*b"NAT", "NaturalPoint Inc."),
    (*b"NAV", "Navigation Corporation"),
    (*b"NAX", "Naxos Tecnologia"),
    (*b"NBL", "N*Able Technologies Inc"),
    (*b"NBS", "National Key Lab. on ISN"),
    (*b"NBT", "NingBo Bestwinning Technology CO., Ltd"),
    (*b"NCA", "Nixdorf Company"),
    (*b"NCC", "NCR Corporation"),
    (*b"NCE", "Norcent Technology, Inc."),
    (*b"NCI", "NewCom Inc"),
    (*b"NCL", "NetComm Ltd"),
    (*b"NCP", "Najing CEC Panda FPD Technology CO. ltd"),
    (*b"NCR", "NCR Electronics"),
    (*b"NCS", "Northgate Computer Systems"),
    (*b"NCT", "NEC CustomTechnica, Ltd."),
    (*b"NDC", "National DataComm Corporaiton"),
    (*b"NDI", "National Display Systems"),
    (*b"NDK", "Naitoh Densei CO., LTD."),
    (*b"NDL", "Network Designers"),
    (*b"NDS", "Nokia Data"),
    (*b"NEC", "NEC Corporation"),
    (*b"NEO", "NEO TELECOM CO.,LTD."),
    (*b"NES", "INNES"),
    (*b"NET", "Mettler Toledo"),
    (*b"NEU", "NEUROTEC - EMPRESA DE PESQUISA E DESENVOLVIMENTO EM BIOMEDICINA"),
    (*b"NEX", "Nexgen Mediatech Inc.,"),
    (*b"NFC", "BTC Korea Co., Ltd"),
    (*b"NFS", "Number Five Software"),
    (*b"NGC", "Network General"),
    (*b"NGS", "A D S Exports"),
    (*b"NHT", "Vinci Labs"),
    (*b"NIC", "National Instruments Corporation"),
    (*b"NIS", "Nissei Electric Company"),
    (*b"NIT", "Network Info Technology"),
    (*b"NIX", "Seanix Technology Inc"),
    (*b"NLC", "Next Level Communications"),
    (*b"NMP", "Nokia Mobile Phones"),
    (*b"NMS", "Natural Micro System"),
    (*b"NMV", "NEC-Mitsubishi Electric Visual Systems Corporation"),
    (*b"NMX", "Neomagic"),
    (*b"NNC", "NNC"),
    (*b"NOD", "3NOD Digital Technology Co. Ltd."),
    (*b"NOE", "NordicEye AB"),
    (*b"NOI", "North Invent A/S"),
    (*b"NOK", "Nokia Display Products"),
    (*b"NOR", "Norand Corporation"),
    (*b"NOT", "Not Limited Inc"),
    (*b"NPA", "Arvanics"),
    (*b"NPI", "Network Peripherals Inc"),
    (*b"NRI", "Noritake Itron Corporation"),
    (*b"NRL", "U.S. Naval Research Lab"),
    (*b"NRT", "Beijing Northern Radiantelecom Co."),
    (*b"NRV", "Taugagreining hf"),
    (*b"NSA", "NeuroSky, Inc."),
    (*b"NSC", "National Semiconductor Corporation"),
    (*b"NSI", "NISSEI ELECTRIC CO.,LTD"),
    (*b"NSP", "Nspire System Inc."),
    (*b"NSS", "Newport Systems Solutions"),
    (*b"NST", "Network Security Technology Co"),
    (*b"NTC", "NeoTech S.R.L"),
    (*b"NTI", "New Tech Int'l Company"),
    (*b"NTL", "National Transcomm. Ltd"),
    (*b"NTN", "Nuvoton Technology Corporation"),
    (*b"NTR", "N-trig Innovative Technologies, Inc."),
    (*b"NTS", "Nexis Technology Solutions Ltd"),
    (*b"NTT", "NTT Advanced Technology Corporation"),
    (*b"NTW", "Networth Inc"),
    (*b"NTX", "Netaccess Inc"),
    (*b"NUG", "NU Technology, Inc."),
    (*b"NUI", "NU Inc."),
    (*b"NVC", "NetVision Corporation"),
    (*b"NVD", "Nvidia"),
    (*b"NVI", "NuVision US, Inc."),
    (*b"NVL", "Novell Inc"),
    (*b"NVT", "Navatek Engineering Corporation"),
    (*b"NWC", "NW Computer Engineering"),
    (*b"NWP", "NovaWeb Technologies Inc"),
    (*b"NWS", "Newisys, Inc."),
    (*b"NXC", "NextCom K.K."),
    (*b"NXG", "Nexgen"),
    (*b"NXP", "NXP Semiconductors bv."),
    (*b"NXQ", "Nexiq Technologies, Inc."),
    (*b"NXS", "Technology Nexus Secure Open Systems AB"),
    (*b"NYC", "nakayo telecommunications,inc."),
    (*b"OAK", "Oak Tech Inc"),
    (*b"OAS", "Oasys Technology Company"),
    (*b"OBS", "Optibase Technologies"),
    (*b"OCD", "Macraigor Systems Inc"),
    (*b"OCN", "Olfan"),
    (*b"OCS", "Open Connect Solutions"),
    (*b"ODM", "ODME Inc."),
    (*b"ODR", "Odrac"),
    (*b"OEC", "ORION ELECTRIC CO.,LTD"),
    (*b"OEI", "Optum Engineering Inc."),
    (*b"OIC", "Option Industrial Computers"),
    (*b"OIM", "Option International"),
    (*b"OIN", "Option International"),
    (*b"OKI", "OKI Electric Industrial Company Ltd"),
    (*b"OLC", "Olicom A/S"),
    (*b"OLD", "Olidata S.p.A."),
    (*b"OLI", "Olivetti"),
    (*b"OLT", "Olitec S.A."),
    (*b"OLV", "Olitec S.A."),
    (*b"OLY", "OLYMPUS CORPORATION"),
    (*b"OMC", "OBJIX Multimedia Corporation"),
    (*b"OMN", "Omnitel"),
    (*b"OMR", "Omron Corporation"),
    (*b"ONE", "Oneac Corporation"),
    (*b"ONK", "ONKYO Corporation"),
    (*b"ONL", "OnLive, Inc"),
    (*b"ONS", "On Systems Inc"),
    (*b"ONW", "OPEN Networks Ltd"),
    (*b"ONX", "SOMELEC Z.I. Du Vert Galanta"),
    (*b"OOS", "OSRAM"),
    (*b"OPC", "Opti Inc"),
    (*b"OPI", "D.N.S. Corporation"),
    (*b"OPP", "OPPO Digital, Inc."),
    (*b"OPT", "OPTi Inc"),
    (*b"OPV", "Optivision Inc"),
    (*b"OQI", "Oksori Company Ltd"),
    (*b"ORG", "ORGA Kartensysteme GmbH"),
    (*b"ORI", "OSR Open Systems Resources, Inc."),
    (*b"ORN", "ORION ELECTRIC CO., LTD."),
    (*b"OSA", "OSAKA Micro Computer, Inc."),
    (*b"OSD", "Optical Systems Design Pty Ltd"),
    (*b"OSI", "Open Stack, Inc."),
    (*b"OSP", "OPTI-UPS Corporation"),
    (*b"OSR", "Oksori Company Ltd"),
    (*b"OTB", "outsidetheboxstuff.com"),
    (*b"OTI", "Orchid Technology"),
    (*b"OTK", "OmniTek"),
    (*b"OTM", "Optoma Corporation"),
    (*b"OTT", "OPTO22, Inc."),
    (*b"OUK", "OUK Company Ltd"),
    (*b"OVR", "Oculus VR, Inc."),
    (*b"OWL", "Mediacom Technologies Pte Ltd"),
    (*b"OXU", "Oxus Research S.A."),
    (*b"OYO", "Shadow Systems"),
    (*b"OZC", "OZ Corporation"),
    (*b"OZO", "Tribe Computer Works Inc"),
    (*b"PAC", "Pacific Avionics Corporation"),
    (*b"PAD", "Promotion and Display Technology Ltd."),
    (*b"PAK", "Many CNC System Co., Ltd."),
    (*b"PAM", "Peter Antesberger Messtechnik"),
    (*b"PAN", "The Panda Project"),
    (*b"PAR", "Parallan Comp Inc"),
    (*b"PBI", "Pitney Bowes"),
    (*b"PBL", "Packard Bell Electronics"),
    (*b"PBN", "Packard Bell NEC"),
    (*b"PBV", "Pitney Bowes"),
    (*b"PCA", "Philips BU Add On Card"),
    (*b"PCB", "OCTAL S.A."),
    (*b"PCC", "PowerCom Technology Company Ltd"),
    (*b"PCG", "First Industrial Computer Inc"),
    (*b"PCI", "Pioneer Computer Inc"),
    (*b"PCK", "PCBANK21"),
    (*b"PCL", "pentel.co.,ltd"),
    (*b"PCM", "PCM Systems Corporation"),
    (*b"PCO", "Performance Concepts Inc.,"),
    (*b"PCP", "Procomp USA Inc"),
    (*b"PCS", "TOSHIBA PERSONAL COMPUTER SYSTEM CORPRATION"),
    (*b"PCT", "PC-Tel Inc"),
    (*b"PCW", "Pacific CommWare Inc"),
    (*b"PCX", "PC Xperten"),
    (*b"PDC", "Polaroid"),
    (*b"PDM", "Psion Dacom Plc."),
    (*b"PDN", "AT&T Paradyne"),
    (*b"PDR", "Pure Data Inc"),
    (*b"PDS", "PD Systems International Ltd"),
    (*b"PDT", "PDTS - Prozessdatentechnik und Systeme"),
    (*b"PDV", "Prodrive B.V."),
    (*b"PEC", "POTRANS Electrical Corp."),
    (*b"PEI", "PEI Electronics Inc"),
    (*b"PEL", "Primax Electric Ltd"),
    (*b"PEN", "Interactive Computer Products Inc"),
    (*b"PEP", "Peppercon AG"),
    (*b"PER", "Perceptive Signal Technologies"),
    (*b"PET", "Practical Electronic Tools"),
    (*b"PFT", "Telia ProSoft AB"),
    (*b"PGI", "PACSGEAR, Inc."),
    (*b"PGM", "Paradigm Advanced Research Centre"),
    (*b"PGP", "propagamma kommunikation"),
    (*b"PGS", "Princeton Graphic Systems"),
    (*b"PHC", "Pijnenburg Beheer N.V."),
    (*b"PHE", "Philips Medical Systems Boeblingen GmbH"),
    (*b"PHI", "DO NOT USE - PHI"),
    (*b"PHL", "Philips Consumer Electronics Company"),
    (*b"PHO", "Photonics Systems Inc."),
    (*b"PHS", "Philips Communication Systems"),
    (*b"PHY", "Phylon Communications"),
    (*b"PIE", "Pacific Image Electronics Company Ltd"),
    (*b"PIM", "Prism, LLC"),
    (*b"PIO", "Pioneer Electronic Corporation"),
    (*b"PIX", "Pixie Tech Inc"),
    (*b"PJA", "Projecta"),
    (*b"PJD", "Projectiondesign AS"),
    (*b"PJT", "Pan Jit International Inc."),
    (*b"PKA", "Acco UK Ltd."),
    (*b"PLC", "Pro-Log Corporation"),
    (*b"PLF", "Panasonic Avionics Corporation"),
    (*b"PLM", "PROLINK Microsystems Corp."),
    (*b"PLT", "PT Hartono Istana Teknologi"),
    (*b"PLV", "PLUS Vision Corp."),
    (*b"PLX", "Parallax Graphics"),
    (*b"PLY", "Polycom Inc."),
    (*b"PMC", "PMC Consumer Electronics Ltd"),
    (*b"PMD", "TDK USA Corporation"),
    (*b"PMM", "Point Multimedia System"),
    (*b"PMT", "Promate Electronic Co., Ltd."),
    (*b"PMX", "Photomatrix"),
    (*b"PNG", "Microsoft"),
    (*b"PNL", "Panelview, Inc."),
    (*b"PNP", "Microsoft"),
    (*b"PNR", "Planar Systems, Inc."),
    (*b"PNS", "PanaScope"),
    (*b"PNT", "HOYA Corporation PENTAX Lifecare Division"),
    (*b"PNX", "Phoenix Technologies, Ltd."),
    (*b"POL", "PolyComp (PTY) Ltd."),
    (*b"PON", "Perpetual Technologies, LLC"),
    (*b"POR", "Portrait Displays, Inc."),
    (*b"PPC", "Phoenixtec Power Company Ltd"),
    (*b"PPD", "MEPhI"),
    (*b"PPI", "Practical Peripherals"),
    (*b"PPM", "Clinton Electronics Corp."),
    (*b"PPP", "Purup Prepress AS"),
    (*b"PPR", "PicPro"),
    (*b"PPX", "Perceptive Pixel Inc."),
    (*b"PQI", "Pixel Qi"),
    (*b"PRA", "PRO/AUTOMATION"),
    (*b"PRC", "PerComm"),
    (*b"PRD", "Praim S.R.L."),
    (*b"PRF", "Schneider Electric Japan Holdings, Ltd."),
    (*b"PRG", "The Phoenix Research Group Inc"),
    (*b"PRI", "Priva Hortimation BV"),
    (*b"PRM", "Prometheus"),
    (*b"PRO", "Proteon"),
    (*b"PRS", "Leutron Vision"),
    (*b"PRT", "Parade Technologies, Ltd."),
    (*b"PRX", "Proxima Corporation"),
    (*b"PSA", "Advanced Signal Processing Technologies"),
    (*b"PSC", "Philips Semiconductors"),
    (*b"PSD", "Peus-Systems GmbH"),
    (*b"PSE", "Practical Solutions Pte., Ltd."),
    (*b"PSI", "PSI-Perceptive Solutions Inc"),
    (*b"PSL", "Perle Systems Limited"),
    (*b"PSM", "Prosum"),
    (*b"PST", "Global Data SA"),
    (*b"PSY", "Prodea Systems Inc."),
    (*b"PTA", "PAR Tech Inc."),
    (*b"PTC", "PS Technology Corporation"),
    (*b"PTG", "Cipher Systems Inc"),
    (*b"PTH", "Pathlight Technology Inc"),
    (*b"PTI", "Promise Technology Inc"),
    (*b"PTL", "Pantel Inc"),
    (*b"PTS", "Plain Tree Systems Inc"),
    (*b"PTW", "DO NOT USE"),
    (*b"PUL", "Pulse-Eight Ltd"),
    (*b"PVG", "Proview Global Co., Ltd"),
    (*b"PVI", "Prime view international Co., Ltd"),
    (*b"PVM", "Penta Studiotechnik GmbH"),
    (*b"PVN", "Pixel Vision"),
    (*b"PVP", "Klos Technologies, Inc."),
    (*b"PXC", "Phoenix Contact"),
    (*b"PXE", "PIXELA CORPORATION"),
    (*b"PXL", "The Moving Pixel Company"),
    (*b"PXM", "Proxim Inc"),
    (*b"QCC", "QuakeCom Company Ltd"),
    (*b"QCH", "Metronics Inc"),
    (*b"QCI", "Quanta Computer Inc"),
    (*b"QCK", "Quick Corporation"),
    (*b"QCL", "Quadrant Components Inc"),
    (*b"QCP", "Qualcomm Inc"),
    (*b"QDI", "Quantum Data Incorporated"),
    (*b"QDM", "Quadram"),
    (*b"QDS", "Quanta Display Inc."),
    (*b"QFF", "Padix Co., Inc."),
    (*b"QFI", "Quickflex, Inc"),
    (*b"QLC", "Q-Logic"),
    (*b"QQQ", "Chuomusen Co., Ltd."),
    (*b"QSI", "Quantum Solutions, Inc."),
    (*b"QTD", "Quantum 3D Inc"),
    (*b"QTH", "Questech Ltd"),
    (*b"QTI", "Quicknet Technologies Inc"),
    (*b"QTM", "Quantum"),
    (*b"QTR", "Qtronix Corporation"),
    (*b"QUA", "Quatographic AG"),
    (*b"QUE", "Questra Consulting"),
    (*b"QVU", "Quartics"),
    (*b"RAC", "Racore Computer Products Inc"),
    (*b"RAD", "Radisys Corporation"),
    (*b"RAI", "Rockwell Automation/Intecolor"),
    (*b"RAN", "Rancho Tech Inc"),
    (*b"RAR", "Raritan, Inc."),
    (*b"RAS", "RAScom Inc"),
    (*b"RAT", "Rent-A-Tech"),
    (*b"RAY", "Raylar Design, Inc."),
    (*b"RCE", "Parc d'Activite des Bellevues"),
    (*b"RCH", "Reach Technology Inc"),
    (*b"RCI", "RC International"),
    (*b"RCN", "Radio Consult SRL"),
    (*b"RCO", "Rockwell Collins"),
    (*b"RDI", "Rainbow Displays, Inc."),
    (*b"RDM", "Tremon Enterprises Company Ltd"),
    (*b"RDN", "RADIODATA GmbH"),
    (*b"RDS", "Radius Inc"),
    (*b"REA", "Real D"),
    (*b"REC", "ReCom"),
    (*b"RED", "Research Electronics Development Inc"),
    (*b"REF", "Reflectivity, Inc."),
    (*b"REH", "Rehan Electronics Ltd."),
    (*b"REL", "Reliance Electric Ind Corporation"),
    (*b"REM", "SCI Systems Inc."),
    (*b"REN", "Renesas Technology Corp."),
    (*b"RES", "ResMed Pty Ltd"),
    (*b"RET", "Resonance Technology, Inc."),
    (*b"REV", "Revolution Display, Inc."),
    (*b"REX", "RATOC Systems, Inc."),
    (*b"RGB", "RGB Spectrum"),
    (*b"RGL", "Robertson Geologging Ltd"),
    (*b"RHD", "RightHand Technologies"),
    (*b"RHM", "Rohm Company Ltd"),
    (*b"RHT", "Red Hat, Inc."),
    (*b"RIC", "RICOH COMPANY, LTD."),
    (*b"RII", "Racal Interlan Inc"),
    (*b"RIO", "Rios Systems Company Ltd"),
    (*b"RIT", "Ritech Inc"),
    (*b"RIV", "Rivulet Communications"),
    (*b"RJA", "Roland Corporation"),
    (*b"RJS", "Advanced Engineering"),
    (*b"RKC", "Reakin Technolohy Corporation"),
    (*b"RLD", "MEPCO"),
    (*b"RLN", "RadioLAN Inc"),
    (*b"RMC", "Raritan Computer, Inc"),
    (*b"RMP", "Research Machines"),
    (*b"RMT", "Roper Mobile"),
    (*b"RNB", "Rainbow Technologies"),
    (*b"ROB", "Robust Electronics GmbH"),
    (*b"ROH", "Rohm Co., Ltd."),
    (*b"ROK", "Rockwell International"),
    (*b"ROP", "Roper International Ltd"),
    (*b"ROS", "Rohde & Schwarz"),
    (*b"RPI", "RoomPro Technologies"),
    (*b"RPT", "R.P.T.Intergroups"),
    (*b"RRI", "Radicom Research Inc"),
    (*b"RSC", "PhotoTelesis"),
    (*b"RSH", "ADC-Centre"),
    (*b"RSI", "Rampage Systems Inc"),
    (*b"RSN", "Radiospire Networks, Inc."),
    (*b"RSQ", "R Squared"),
    (*b"RSS", "Rockwell Semiconductor Systems"),
    (*b"RSV", "Ross Video Ltd"),
    (*b"RSX", "Rapid Tech Corporation"),
    (*b"RTC", "Relia Technologies"),
    (*b"RTI", "Rancho Tech Inc"),
    (*b"RTK", "DO NOT USE"),
    (*b"RTL", "Realtek Semiconductor Company Ltd"),
    (*b"RTS", "Raintree Systems"),
    (*b"RUN", "RUNCO International"),
    (*b"RUP", "Ups Manufactoring s.r.l."),
    (*b"RVC", "RSI Systems Inc"),
    (*b"RVI", "Realvision Inc"),
    (*b"RVL", "Reveal Computer Prod"),
    (*b"RWC", "Red Wing Corporation"),
    (*b"RXT", "Tectona SoftSolutions (P) Ltd.,"),
    (*b"RZS", "Rozsnyó, s.r.o."),
    (*b"SAA", "Sanritz Automation Co.,Ltd."),
    (*b"SAE", "Saab Aerotech"),
    (*b"SAG", "Sedlbauer"),
    (*b"SAI", "Sage Inc"),
    (*b"SAK", "Saitek Ltd"),
    (*b"SAM", "Samsung Electric Company"),
    (*b"SAN", "Sanyo Electric Co.,Ltd."),
    (*b"SAS", "Stores Automated Systems Inc"),
    (*b"SAT", "Shuttle Tech"),
    (*b"SBC", "Shanghai Bell Telephone Equip Mfg Co"),
    (*b"SBD", "Softbed - Consulting & Development Ltd"),
    (*b"SBI", "SMART Technologies Inc."),
    (*b"SBS", "SBS-or Industrial Computers GmbH"),
    (*b"SBT", "Senseboard Technologies AB"),
    (*b"SCB", "SeeCubic B.V."),
    (*b"SCC", "SORD Computer Corporation"),
    (*b"SCD", "Sanyo Electric Company Ltd"),
    (*b"SCE", "Sun Corporation"),
    (*b"SCH", "Schlumberger Cards"),
    (*b"SCI", "System Craft"),
    (*b"SCL", "Sigmacom Co., Ltd."),
    (*b"SCM", "SCM Microsystems Inc"),
    (*b"SCN", "Scanport, Inc."),
    (*b"SCO", "SORCUS Computer GmbH"),
    (*b"SCP", "Scriptel Corporation"),
    (*b"SCR", "Systran Corporation"),
    (*b"SCS", "Nanomach Anstalt"),
    (*b"SCT", "Smart Card Technology"),
    (*b"SDA", "SAT (Societe Anonyme)"),
    (*b"SDC", "Samsung Display Corp."),
    (*b"SDD", "Intrada-SDD Ltd"),
    (*b"SDE", "Sherwood Digital Electronics Corporation"),
    (*b"SDF", "SODIFF E&T CO., Ltd."),
    (*b"SDH", "Communications Specialies, Inc."),
    (*b"SDI", "Samtron Displays Inc"),
    (*b"SDK", "SAIT-Devlonics"),
    (*b"SDR", "SDR Systems"),
    (*b"SDS", "SunRiver Data System"),
    (*b"SDT", "Siemens AG"),
    (*b"SDX", "SDX Business Systems Ltd"),
    (*b"SEA", "Seanix Technology Inc."),
    (*b"SEB", "system elektronik GmbH"),
    (*b"SEC", "Seiko Epson Corporation"),
    (*b"SEE", "SeeColor Corporation"),
    (*b"SEI", "Seitz & Associates Inc"),
    (*b"SEK", "Seiko Instruments Information Devices Inc"),
    (*b"SEL", "Way2Call Communications"),
    (*b"SEM", "Samsung Electronics Company Ltd"),
    (*b"SEN", "Sencore"),
    (*b"SEO", "SEOS Ltd"),
    (*b"SEP", "SEP Eletronica Ltda."),
    (*b"SER", "Sony Ericsson Mobile Communications Inc."),
    (*b"SES", "Session Control LLC"),
    (*b"SET", "SendTek Corporation"),
    (*b"SFM", "TORNADO Company"),
    (*b"SFT", "Mikroforum Ring 3"),
    (*b"SGC", "Spectragraphics Corporation"),
    (*b"SGD", "Sigma Designs, Inc."),
    (*b"SGE", "Kansai Electric Company Ltd"),
    (*b"SGI", "Scan Group Ltd"),
    (*b"SGL", "Super Gate Technology Company Ltd"),
    (*b"SGM", "SAGEM"),
    (*b"SGO", "Logos Design A/S"),
    (*b"SGT", "Stargate Technology"),
    (*b"SGW", "Shanghai Guowei Science and Technology Co., Ltd."),
    (*b"SGX", "Silicon Graphics Inc"),
    (*b"SGZ", "Systec Computer GmbH"),
    (*b"SHC", "ShibaSoku Co., Ltd."),
    (*b"SHG", "Soft & Hardware development Goldammer GmbH"),
    (*b"SHI", "Jiangsu Shinco Electronic Group Co., Ltd"),
    (*b"SHP", "Sharp Corporation"),
    (*b"SHR", "Digital Discovery"),
    (*b"SHT", "Shin Ho Tech"),
    (*b"SIA", "SIEMENS AG"),
    (*b"SIB", "Sanyo Electric Company Ltd"),
    (*b"SIC", "Sysmate Corporation"),
    (*b"SID", "Seiko Instruments Information Devices Inc"),
    (*b"SIE", "Siemens"),
    (*b"SIG", "Sigma Designs Inc"),
    (*b"SII", "Silicon Image, Inc."),
    (*b"SIL", "Silicon Laboratories, Inc"),
    (*b"SIM", "S3 Inc"),
    (*b"SIN", "Singular Technology Co., Ltd."),
    (*b"SIR", "Sirius Technologies Pty Ltd"),
    (*b"SIS", "Silicon Integrated Systems Corporation"),
    (*b"SIT", "Sitintel"),
    (*b"SIU", "Seiko Instruments USA Inc"),
    (*b"SIX", "Zuniq Data Corporation"),
    (*b"SJE", "Sejin Electron Inc"),
    (*b"SKD", "Schneider & Koch"),
    (*b"SKI", "LG Electronics"),
    (*b"SKM", "Guangzhou Teclast Information Technology Limited"),
    (*b"SKT", "Samsung Electro-Mechanics Company Ltd"),
    (*b"SKY", "SKYDATA S.P.A."),
    (*b"SLA", "Systeme Lauer GmbH&Co KG"),
    (*b"SLB", "Shlumberger Ltd"),
    (*b"SLC", "Syslogic Datentechnik AG"),
    (*b"SLF", "StarLeaf"),
    (*b"SLH", "Silicon Library Inc."),
    (*b"SLI", "Symbios Logic Inc"),
    (*b"SLK", "Silitek Corporation"),
    (*b"SLM", "Solomon Technology Corporation"),
    (*b"SLR", "Schlumberger Technology Corporate"),
    (*b"SLS", "Schnick-Schnack-Systems GmbH"),
    (*b"SLT", "Salt Internatioinal Corp."),
    (*b"SLX", "Specialix"),
    (*b"SMA", "SMART Modular Technologies"),
    (*b"SMB", "Schlumberger"),
    (*b"SMC", "Standard Microsystems Corporation"),
    (*b"SME", "Sysmate Company"),
    (*b"SMI", "SpaceLabs Medical Inc"),
    (*b"SMK", "SMK CORPORATION"),
    (*b"SML", "Sumitomo Metal Industries, Ltd."),
    (*b"SMM", "Shark Multimedia Inc"),
    (*b"SMO", "STMicroelectronics"),
    (*b"SMP", "Simple Computing"),
    (*b"SMR", "B.& V. s.r.l."),
    (*b"SMS", "Silicom Multimedia Systems Inc"),
    (*b"SMT", "Silcom Manufacturing Tech Inc"),
    (*b"SNC", "Sentronic International Corp."),
    (*b"SNI", "Siemens Microdesign GmbH"),
    (*b"SNK", "S&K Electronics"),
    (*b"SNN", "SUNNY ELEKTRONIK"),
    (*b"SNO", "SINOSUN TECHNOLOGY CO., LTD"),
    (*b"SNP", "Siemens Nixdorf Info Systems"),
    (*b"SNS", "Cirtech (UK) Ltd"),
    (*b"SNT", "SuperNet Inc"),
    (*b"SNW", "Snell & Wilcox"),
    (*b"SNX", "Sonix Comm. Ltd"),
    (*b"SNY", "Sony"),
    (*b"SOI", "Silicon Optix Corporation"),
    (*b"SOL", "Solitron Technologies Inc"),
    (*b"SON", "Sony"),
    (*b"SOR", "Sorcus Computer GmbH"),
    (*b"SOT", "Sotec Company Ltd"),
    (*b"SOY", "SOYO Group, Inc"),
    (*b"SPC", "SpinCore Technologies, Inc"),
    (*b"SPE", "SPEA Software AG"),
    (*b"SPH", "G&W Instruments GmbH"),
    (*b"SPI", "SPACE-I Co., Ltd."),
    (*b"SPK", "SpeakerCraft"),
    (*b"SPL", "Smart Silicon Systems Pty Ltd"),
    (*b"SPN", "Sapience Corporation"),
    (*b"SPR", "pmns GmbH"),
    (*b"SPS", "Synopsys Inc"),
    (*b"SPT", "Sceptre Tech Inc"),
    (*b"SPU", "SIM2 Multimedia S.P.A."),
    (*b"SPX", "Simplex Time Recorder Co."),
    (*b"SQT", "Sequent Computer Systems Inc"),
    (*b"SRC", "Integrated Tech Express Inc"),
    (*b"SRD", "Setred"),
    (*b"SRF", "Surf Communication Solutions Ltd"),
    (*b"SRG", "Intuitive Surgical, Inc."),
    (*b"SRS", "SR-Systems e.K."),
    (*b"SRT", "SeeReal Technologies GmbH"),
    (*b"SSC", "Sierra Semiconductor Inc"),
    (*b"SSD", "FlightSafety International"),
    (*b"SSE", "Samsung Electronic Co."),
    (*b"SSI", "S-S Technology Inc"),
    (*b"SSJ", "Sankyo Seiki Mfg.co., Ltd"),
    (*b"SSL", "Shenzhen South-Top Computer Co., Ltd."),
    (*b"SSP", "Spectrum Signal Proecessing Inc"),
    (*b"SSS", "S3 Inc"),
    (*b"SST", "SystemSoft Corporation"),
    (*b"STA", "ST Electronics Systems Assembly Pte Ltd"),
    (*b"STB", "STB Systems Inc"),
    (*b"STC", "STAC Electronics"),
    (*b"STD", "STD Computer Inc"),
    (*b"STE", "SII Ido-Tsushin Inc"),
    (*b"STF", "Starflight Electronics"),
    (*b"STG", "StereoGraphics Corp."),
    (*b"STH", "Semtech Corporation"),
    (*b"STI", "Smart Tech Inc"),
    (*b"STK", "SANTAK CORP."),
    (*b"STL", "SigmaTel Inc"),
    (*b"STM", "SGS Thomson Microelectronics"),
    (*b"STN", "Samsung Electronics America"),
    (*b"STO", "Stollmann E+V GmbH"),
    (*b"STP", "StreamPlay Ltd"),
    (*b"STQ", "Synthetel Corporation"),
    (*b"STR", "Starlight Networks Inc"),
    (*b"STS", "SITECSYSTEM CO., LTD."),
    (*b"STT", "Star Paging Telecom Tech (Shenzhen) Co. Ltd."),
    (*b"STU", "Sentelic Corporation"),
    (*b"STW", "Starwin Inc."),
    (*b"STX", "ST-Ericsson"),
    (*b"STY", "SDS Technologies"),
    (*b"SUB", "Subspace Comm. Inc"),
    (*b"SUM", "Summagraphics Corporation"),
    (*b"SUN", "Sun Electronics Corporation"),
    (*b"SUP", "Supra Corporation"),
    (*b"SUR", "Surenam Computer Corporation"),
    (*b"SVA", "SGEG"),
    (*b"SVC", "Intellix Corp."),
    (*b"SVD", "SVD Computer"),
    (*b"SVI", "Sun Microsystems"),
    (*b"SVR", "Sensics, Inc."),
    (*b"SVS", "SVSI"),
    (*b"SVT", "SEVIT Co., Ltd."),
    (*b"SWC", "Software Café"),
    (*b"SWI", "Sierra Wireless Inc."),
    (*b"SWL", "Sharedware Ltd"),
    (*b"SWS", "Static"),
    (*b"SWT", "Software Technologies Group,Inc."),
    (*b"SXB", "Syntax-Brillian"),
    (*b"SXD", "Silex technology, Inc."),
    (*b"SXG", "SELEX GALILEO"),
    (*b"SXL", "SolutionInside"),
    (*b"SXT", "SHARP TAKAYA ELECTRONIC INDUSTRY CO.,LTD."),
    (*b"SYC", "Sysmic"),
    (*b"SYE", "SY Electronics Ltd"),
    (*b"SYK", "Stryker Communications"),
    (*b"SYL", "Sylvania Computer Products"),
    (*b"SYM", "Symicron Computer Communications Ltd."),
    (*b"SYN", "Synaptics Inc"),
    (*b"SYP", "SYPRO Co Ltd"),
    (*b"SYS", "Sysgration Ltd"),
    (*b"SYT", "Seyeon Tech Company Ltd"),
    (*b"SYV", "SYVAX Inc"),
    (*b"SYX", "Prime Systems, Inc."),
    (*b"TAA", "Tandberg"),
    (*b"TAB", "Todos Data System AB"),
    (*b"TAG", "Teles AG"),
    (*b"TAI", "Toshiba America Info Systems Inc"),
    (*b"TAM", "Tamura Seisakusyo Ltd"),
    (*b"TAS", "Taskit Rechnertechnik GmbH"),
    (*b"TAT", "Teleliaison Inc"),
    (*b"TAV", "Thales Avionics"),
    (*b"TAX", "Taxan (Europe) Ltd"),
    (*b"TBB", "Triple S Engineering Inc"),
    (*b"TBC", "Turbo Communication, Inc"),
    (*b"TBS", "Turtle Beach System"),
    (*b"TCC", "Tandon Corporation"),
    (*b"TCD", "Taicom Data Systems Co., Ltd."),
    (*b"TCE", "Century Corporation"),
    (*b"TCH", "Interaction Systems, Inc"),
    (*b"TCI", "Tulip Computers Int'l B.V."),
    (*b"TCJ", "TEAC America Inc"),
    (*b"TCL", "Technical Concepts Ltd"),
    (*b"TCM", "3Com Corporation"),
    (*b"TCN", "Tecnetics (PTY) Ltd"),
    (*b"TCO", "Thomas-Conrad Corporation"),
    (*b"TCR", "Thomson Consumer Electronics"),
    (*b"TCS", "Tatung Company of America Inc"),
    (*b"TCT", "Telecom Technology Centre Co. Ltd."),
    (*b"TCX", "FREEMARS Heavy Industries"),
    (*b"TDC", "Teradici"),
    (*b"TDD", "Tandberg Data Display AS"),
    (*b"TDK", "TDK USA Corporation"),
    (*b"TDM", "Tandem Computer Europe Inc"),
    (*b"TDP", "3D Perception"),
    (*b"TDS", "Tri-Data Systems Inc"),
    (*b"TDT", "TDT"),
    (*b"TDV", "TDVision Systems, Inc."),
    (*b"TDY", "Tandy Electronics"),
    (*b"TEA", "TEAC System Corporation"),
    (*b"TEC", "Tecmar Inc"),
    (*b"TEK", "Tektronix Inc"),
    (*b"TEL", "Promotion and Display Technology Ltd."),
    (*b"TER", "TerraTec Electronic GmbH"),
    (*b"TET", "TETRADYNE CO., LTD."),
    (*b"TEV", "Televés, S.A."),
    (*b"TEZ", "Tech Source Inc."),
    (*b"TGC", "Toshiba Global Commerce Solutions, Inc."),
    (*b"TGI", "TriGem Computer Inc"),
    (*b"TGM", "TriGem Computer,Inc."),
    (*b"TGS", "Torus Systems Ltd"),
    (*b"TGV", "Grass Valley Germany GmbH"),
    (*b"THN", "Thundercom Holdings Sdn. Bhd."),
    (*b"TIC", "Trigem KinfoComm"),
    (*b"TIP", "TIPTEL AG"),
    (*b"TIV", "OOO Technoinvest"),
    (*b"TIX", "Tixi.Com GmbH"),
    (*b"TKC", "Taiko Electric Works.LTD"),
    (*b"TKN", "Teknor Microsystem Inc"),
    (*b"TKO", "TouchKo, Inc."),
    (*b"TKS", "TimeKeeping Systems, Inc."),
    (*b"TLA", "Ferrari Electronic GmbH"),
    (*b"TLD", "Telindus"),
    (*b"TLE", "Zhejiang Tianle Digital Electric Co., Ltd."),
    (*b"TLF", "Teleforce.,co,ltd"),
    (*b"TLI", "TOSHIBA TELI CORPORATION"),
    (*b"TLK", "Telelink AG"),
    (*b"TLS", "Teleste Educational OY"),
    (*b"TLT", "Dai Telecom S.p.A."),
    (*b"TLV", "S3 Inc"),
    (*b"TLX", "Telxon Corporation"),
    (*b"TMC", "Techmedia Computer Systems Corporation"),
    (*b"TME", "AT&T Microelectronics"),
    (*b"TMI", "Texas Microsystem"),
    (*b"TMM", "Time Management, Inc."),
    (*b"TMR", "Taicom International Inc"),
    (*b"TMS", "Trident Microsystems Ltd"),
    (*b"TMT", "T-Metrics Inc."),
    (*b"TMX", "Thermotrex Corporation"),
    (*b"TNC", "TNC Industrial Company Ltd"),
    (*b"TNJ", "DO NOT USE"),
    (*b"TNM", "TECNIMAGEN SA"),
    (*b"TNY", "Tennyson Tech Pty Ltd"),
    (*b"TOE", "TOEI Electronics Co., Ltd."),
    (*b"TOG", "The OPEN Group"),
    (*b"TOL", "TCL Corporation"),
    (*b"TOM", "Ceton Corporation"),
    (*b"TON", "TONNA"),
    (*b"TOP", "Orion Communications Co., Ltd."),
    (*b"TOS", "Toshiba Corporation"),
    (*b"TOU", "Touchstone Technology"),
    (*b"TPC", "Touch Panel Systems Corporation"),
    (*b"TPE", "Technology Power Enterprises Inc"),
    (*b"TPJ", "Junnila"),
    (*b"TPK", "TOPRE CORPORATION"),
    (*b"TPR", "Topro Technology Inc"),
    (*b"TPS", "Teleprocessing Systeme GmbH"),
    (*b"TPT", "Thruput Ltd"),
    (*b"TPV", "Top Victory Electronics ( Fujian ) Company Ltd"),
    (*b"TPZ", "Ypoaz Systems Inc"),
    (*b"TRA", "TriTech Microelectronics International"),
    (*b"TRB", "Triumph Board a.s."),
    (*b"TRC", "Trioc AB"),
    (*b"TRD", "Trident Microsystem Inc"),
    (*b"TRE", "Tremetrics"),
    (*b"TRI", "Tricord Systems"),
    (*b"TRL", "Royal Information"),
    (*b"TRM", "Tekram Technology Company Ltd"),
    (*b"TRN", "Datacommunicatie Tron B.V."),
    (*b"TRP", "TRAPEZE GROUP"),
    (*b"TRS", "Torus Systems Ltd"),
    (*b"TRT", "Tritec Electronic AG"),
    (*b"TRU", "Aashima Technology B.V."),
    (*b"TRV", "Trivisio Prototyping GmbH"),
    (*b"TRX", "Trex Enterprises"),
    (*b"TSB", "Toshiba America Info Systems Inc"),
    (*b"TSC", "Sanyo Electric Company Ltd"),
    (*b"TSD", "TechniSat Digital GmbH"),
    (*b"TSE", "Tottori Sanyo Electric"),
    (*b"TSF", "Racal-Datacom"),
    (*b"TSG", "The Software Group Ltd"),
    (*b"TSI", "TeleVideo Systems"),
    (*b"TSL", "Tottori SANYO Electric Co., Ltd."),
    (*b"TSP", "U.S. Navy"),
    (*b"TST", "Transtream Inc"),
    (*b"TSV", "TRANSVIDEO"),
    (*b"TSY", "TouchSystems"),
    (*b"TTA", "Topson Technology Co., Ltd."),
    (*b"TTB", "National Semiconductor Japan Ltd"),
    (*b"TTC", "Telecommunications Techniques Corporation"),
    (*b"TTE", "TTE, Inc."),
    (*b"TTI", "Trenton Terminals Inc"),
    (*b"TTK", "Totoku Electric Company Ltd"),
    (*b"TTL", "2-Tel B.V."),
    (*b"TTP", "Toshiba Corporation"),
    (*b"TTS", "TechnoTrend Systemtechnik GmbH"),
    (*b"TTX", "Taitex Corporation"),
    (*b"TTY", "TRIDELITY Display Solutions GmbH"),
    (*b"TUA", "T+A elektroakustik GmbH"),
    (*b"TUT", "Tut Systems"),
    (*b"TVD", "Tecnovision"),
    (*b"TVI", "Truevision"),
    (*b"TVM", "Taiwan Video & Monitor Corporation"),
    (*b"TVO", "TV One Ltd"),
    (*b"TVR", "TV Interactive Corporation"),
    (*b"TVS", "TVS Electronics Limited"),
    (*b"TVV", "TV1 GmbH"),
    (*b"TWA", "Tidewater Association"),
    (*b"TWE", "Kontron Electronik"),
    (*b"TWH", "Twinhead International Corporation"),
    (*b"TWI", "Easytel oy"),
    (*b"TWK", "TOWITOKO electronics GmbH"),
    (*b"TXL", "Trixel Ltd"),
    (*b"TXN", "Texas Insturments"),
    (*b"TXT", "Textron Defense System"),
    (*b"TYN", "Tyan Computer Corporation"),
    (*b"UAS", "Ultima Associates Pte Ltd"),
    (*b"UBI", "Ungermann-Bass Inc"),
    (*b"UBL", "Ubinetics Ltd."),
    (*b"UDN", "Uniden Corporation"),
    (*b"UEC", "Ultima Electronics Corporation"),
    (*b"UEG", "Elitegroup Computer Systems Company Ltd"),
    (*b"UEI", "Universal Electronics Inc"),
    (*b"UET", "Universal Empowering Technologies"),
    (*b"UFG", "UNIGRAF-USA"),
    (*b"UFO", "UFO Systems Inc"),
    (*b"UHB", "XOCECO"),
    (*b"UIC", "Uniform Industrial Corporation"),
    (*b"UJR", "Ueda Japan Radio Co., Ltd."),
    (*b"ULT", "Ultra Network Tech"),
    (*b"UMC", "United Microelectr Corporation"),
    (*b"UMG", "Umezawa Giken Co.,Ltd"),
    (*b"UMM", "Universal Multimedia"),
    (*b"UMT", "UltiMachine"),
    (*b"UNA", "Unisys DSD"),
    (*b"UNB", "Unisys Corporation"),
    (*b"UNC", "Unisys Corporation"),
    (*b"UND", "Unisys Corporation"),
    (*b"UNE", "Unisys Corporation"),
    (*b"UNF", "Unisys Corporation"),
    (*b"UNI", "Uniform Industry Corp."),
    (*b"UNM", "Unisys Corporation"),
    (*b"UNO", "Unisys Corporation"),
    (*b"UNP", "Unitop"),
    (*b"UNS", "Unisys Corporation"),
    (*b"UNT", "Unisys Corporation"),
    (*b"UNY", "Unicate"),
    (*b"UPP", "UPPI"),
    (*b"UPS", "Systems Enhancement"),
    (*b"URD", "Video Computer S.p.A."),
    (*b"USA", "Utimaco Safeware AG"),
    (*b"USD", "U.S. Digital Corporation"),
    (*b"USE", "U. S. Electronics Inc."),
    (*b"USI", "Universal Scientific Industrial Co., Ltd."),
    (*b"USR", "U.S. Robotics Inc"),
    (*b"UTC", "Unicompute Technology Co., Ltd."),
    (*b"UTD", "Up to Date Tech"),
    (*b"UWC", "Uniwill Computer Corp."),
    (*b"VAD", "Vaddio, LLC"),
    (*b"VAL", "Valence Computing Corporation"),
    (*b"VAR", "Varian Australia Pty Ltd"),
    (*b"VBR", "VBrick Systems Inc."),
    (*b"VBT", "Valley Board Ltda"),
    (*b"VCC", "Virtual Computer Corporation"),
    (*b"VCI", "VistaCom Inc"),
    (*b"VCJ", "Victor Company of Japan, Limited"),
    (*b"VCM", "Vector Magnetics, LLC"),
    (*b"VCX", "VCONEX"),
    (*b"VDA", "Victor Data Systems"),
    (*b"VDC", "VDC Display Systems"),
    (*b"VDM", "Vadem"),
    (*b"VDO", "Video & Display Oriented Corporation"),
    (*b"VDS", "Vidisys GmbH & Company"),
    (*b"VDT", "Viditec, Inc."),
    (*b"VEC", "Vector Informatik GmbH"),
    (*b"VEK", "Vektrex"),
    (*b"VES", "Vestel Elektronik Sanayi ve Ticaret A. S."),
    (*b"VFI", "VeriFone Inc"),
    (*b"VHI", "Macrocad Development Inc."),
    (*b"VIA", "VIA Tech Inc"),
    (*b"VIB", "Tatung UK Ltd"),
    (*b"VIC", "Victron B.V."),
    (*b"VID", "Ingram Macrotron Germany"),
    (*b"VIK", "Viking Connectors"),
    (*b"VIM", "Via Mons Ltd."),
    (*b"VIN", "Vine Micros Ltd"),
    (*b"VIR", "Visual Interface, Inc"),
    (*b"VIS", "Nanao"),
    (*b"VIT", "Visitech AS"),
    (*b"VIZ", "VIZIO, Inc"),
    (*b"VLB", "ValleyBoard Ltda."),
    (*b"VLC", "VersaLogic Corporation"),
    (*b"VLK", "Vislink International Ltd"),
    (*b"VLV", "Valve Corporation"),
    (*b"VMI", "Vermont Microsystems"),
    (*b"VML", "Vine Micros Limited"),
    (*b"VMW", "VMware Inc.,"),
    (*b"VNC", "Vinca Corporation"),
    (*b"VOB", "MaxData Computer AG"),
    (*b"VPR", "Best Buy"),
    (*b"VPX", "VPixx Technologies Inc."),
    (*b"VRC", "Virtual Resources Corporation"),
    (*b"VRG", "VRgineers, Inc."),
    (*b"VRM", "VRmagic Holding AG"),
    (*b"VRS", "VRstudios, Inc."),
    (*b"VSC", "ViewSonic Corporation"),
    (*b"VSD", "3M"),
    (*b"VSI", "VideoServer"),
    (*b"VSN", "Ingram Macrotron"),
    (*b"VSP", "Vision Systems GmbH"),
    (*b"VSR", "V-Star Electronics Inc."),
    (*b"VTB", "Videotechnik Breithaupt"),
    (*b"VTC", "VTel Corporation"),
    (*b"VTG", "Voice Technologies Group Inc"),
    (*b"VTI", "VLSI Tech Inc"),
    (*b"VTK", "Viewteck Co., Ltd."),
    (*b"VTL", "Vivid Technology Pte Ltd"),
    (*b"VTM", "Miltope Corporation"),
    (*b"VTN", "VIDEOTRON CORP."),
    (*b"VTS", "VTech Computers Ltd"),
    (*b"VTV", "VATIV Technologies"),
    (*b"VTX", "Vestax Corporation"),
    (*b"VUT", "Vutrix (UK) Ltd"),
    (*b"VWB", "Vweb Corp."),
    (*b"WAC", "Wacom Tech"),
    (*b"WAL", "Wave Access"),
    (*b"WAN", "DO NOT USE"),
    (*b"WAV", "Wavephore"),
    (*b"WBN", "MicroSoftWare"),
    (*b"WBS", "WB Systemtechnik GmbH"),
    (*b"WCI", "Wisecom Inc"),
    (*b"WCS", "Woodwind Communications Systems Inc"),
    (*b"WDC", "Western Digital"),
    (*b"WDE", "Westinghouse Digital Electronics"),
    (*b"WEB", "WebGear Inc"),
    (*b"WEC", "Winbond Electronics Corporation"),
    (*b"WEL", "W-DEV"),
    (*b"WEY", "WEY Design AG"),
    (*b"WHI", "Whistle Communications"),
    (*b"WII", "Innoware Inc"),
    (*b"WIL", "WIPRO Information Technology Ltd"),
    (*b"WIN", "Wintop Technology Inc"),
    (*b"WIP", "Wipro Infotech"),
    (*b"WKH", "Uni-Take Int'l Inc."),
    (*b"WLD", "Wildfire Communications Inc"),
    (*b"WML", "Wolfson Microelectronics Ltd"),
    (*b"WMO", "Westermo Teleindustri AB"),
    (*b"WMT", "Winmate Communication Inc"),
    (*b"WNI", "WillNet Inc."),
    (*b"WNV", "Winnov L.P."),
    (*b"WNX", "Wincor Nixdorf International GmbH"),
    (*b"WPA", "Matsushita Communication Industrial Co., Ltd."),
    (*b"WPI", "Wearnes Peripherals International (Pte) Ltd"),
    (*b"WRC", "WiNRADiO Communications"),
    (*b"WSC", "CIS Technology Inc"),
    (*b"WSP", "Wireless And Smart Products Inc."),
    (*b"WST", "Wistron Corporation"),
    (*b"WTC", "ACC Microelectronics"),
    (*b"WTI", "WorkStation Tech"),
    (*b"WTK", "Wearnes Thakral Pte"),
    (*b"WTS", "Restek Electric Company Ltd"),
    (*b"WVM", "Wave Systems Corporation"),
    (*b"WVV", "WolfVision GmbH"),
    (*b"WWP", "Wipotec Wiege- und Positioniersysteme GmbH"),
    (*b"WWV", "World Wide Video, Inc."),
    (*b"WXT", "Woxter Technology Co. Ltd"),
    (*b"WYS", "Myse Technology"),
    (*b"WYT", "Wooyoung Image & Information Co.,Ltd."),
    (*b"XAC", "XAC Automation Corp"),
    (*b"XAD", "Alpha Data"),
    (*b"XDM", "XDM Ltd."),
    (*b"XER", "DO NOT USE - XER"),
    (*b"XFG", "Jan Strapko - FOTO"),
    (*b"XFO", "EXFO Electro Optical Engineering"),
    (*b"XIN", "Xinex Networks Inc"),
    (*b"XIO", "Xiotech Corporation"),
    (*b"XIR", "Xirocm Inc"),
    (*b"XIT", "Xitel Pty ltd"),
    (*b"XLX", "Xilinx, Inc."),
    (*b"XMI", "Beijing Xiaomi Electronics Co., Ltd."),
    (*b"XMM", "C3PO S.L."),
    (*b"XNT", "XN Technologies, Inc."),
    (*b"XOC", "DO NOT USE - XOC"),
    (*b"XQU", "SHANGHAI SVA-DAV ELECTRONICS CO., LTD"),
    (*b"XRC", "Xircom Inc"),
    (*b"XRO", "XORO ELECTRONICS (CHENGDU) LIMITED"),
    (*b"XSN", "Xscreen AS"),
    (*b"XST", "XS Technologies Inc"),
    (*b"XSY", "XSYS"),
    (*b"XTD", "Icuiti Corporation"),
    (*b"XTE", "X2E GmbH"),
    (*b"XTL", "Crystal Computer"),
    (*b"XTN", "X-10 (USA) Inc"),
    (*b"XYC", "Xycotec Computer GmbH"),
    (*b"YED", "Y-E Data Inc"),
    (*b"YHQ", "Yokogawa Electric Corporation"),
    (*b"YHW", "Exacom SA"),
    (*b"YMH", "Yamaha Corporation"),
    (*b"YOW", "American Biometric Company"),
    (*b"ZAN", "Zandar Technologies plc"),
    (*b"ZAX", "Zefiro Acoustics"),
    (*b"ZAZ", "ZeeVee, Inc."),
    (*b"ZBR", "Zebra Technologies International, LLC"),
    (*b"ZBX", "Zebax Technologies"),
    (*b"ZCM", "Zenith Data Systems"),
    (*b"ZCT", "ZeitControl cardsystems GmbH"),
    (*b"ZDS", "Zenith Data Systems"),
    (*b"ZEN", "ZENIC Inc."),
    (*b"ZGT", "Zenith Data Systems"),
    (*b"ZIC", "Nationz Technologies Inc."),
    (*b"ZMC", "HangZhou ZMCHIVIN"),
    (*b"ZMT", "Zalman Tech Co., Ltd."),
    (*b"ZMZ", "Z Microsystems"),
    (*b"ZNI", "Zetinet Inc"),
    (*b"ZNX", "Znyx Adv. Systems"),
    (*b"ZOW", "Zowie Intertainment, Inc"),
    (*b"ZRN", "Zoran Corporation"),
    (*b"ZSE", "Zenith Data Systems"),
    (*b"ZTC", "ZyDAS Technology Corporation"),
    (*b"ZTE", "ZTE Corporation"),
    (*b"ZTI", "Zoom Telephonics Inc"),
    (*b"ZTM", "ZT Group Int'l Inc."),
    (*b"ZTT", "Z3 Technology"),
    (*b"ZYD", "Zydacron Inc"),
    (*b"ZYP", "Zypcom Inc"),
    (*b"ZYT", "Zytex Computers"),
    (*b"ZYX", "Zyxel"),
    (*b"ZZZ", "Boca Research Inc"),
];

/// Binary search over [`PNP_IDS`]. O(log n), no allocation.
#[must_use]
pub fn lookup_pnp_id(code: [u8; 3]) -> Option<&'static str> {
    PNP_IDS
        .binary_search_by(|(entry_code, _)| entry_code.cmp(&code))
        .ok()
        .and_then(|index| PNP_IDS.get(index))
        .map(|(_, name)| *name)
}
